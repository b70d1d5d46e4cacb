use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sku_i18n::{
    format_sku_spec_values, format_spec_value, resolve_sku_code_from_snapshot,
    resolve_sku_spec_from_snapshot, FormatConfig, SkuCodeOptions, SkuFormatter, SpecValue,
};

fn order_lines() -> Value {
    serde_json::from_str(
        r#"[
  { "sku_code": "DEFAULT", "spec_values": {} },
  {
    "sku_code": "TS-BLK-M",
    "spec_values": {
      "颜色": { "zh-CN": "黑色", "zh-TW": "黑色", "en-US": "Black" },
      "尺码": "M",
      "材质": [{ "zh-CN": "棉", "en-US": "Cotton" }, { "zh-CN": "氨纶", "en-US": "Spandex" }]
    }
  },
  { "sku_code": "gift-01", "spec_values": { "zh-TW": "禮盒裝", "en-US": "Gift box" } },
  { "sku_code": "", "spec_values": { "note": { "size": "L", "fit": "slim" } } }
]"#,
    )
    .unwrap()
}

#[test]
fn codes_for_a_whole_order() {
    let opts = SkuCodeOptions::with_default_label("默认款");
    let codes: Vec<String> = order_lines()
        .as_array()
        .unwrap()
        .iter()
        .map(|line| resolve_sku_code_from_snapshot(line, &opts))
        .collect();
    assert_eq!(codes, vec!["默认款", "TS-BLK-M", "gift-01", ""]);
}

#[test]
fn specs_for_a_whole_order_in_english() {
    let specs: Vec<String> = order_lines()
        .as_array()
        .unwrap()
        .iter()
        .map(|line| resolve_sku_spec_from_snapshot(line, "en"))
        .collect();
    assert_eq!(
        specs,
        vec![
            "",
            "颜色: Black / 尺码: M / 材质: Cotton, Spandex",
            "Gift box",
            r#"note: {"size":"L","fit":"slim"}"#,
        ]
    );
}

#[test]
fn specs_for_a_whole_order_in_simplified_chinese() {
    let lines = order_lines();
    // Only zh-TW and en-US are present; zh-TW comes second in the default chain.
    assert_eq!(resolve_sku_spec_from_snapshot(&lines[2], "zh-CN"), "禮盒裝");
    assert_eq!(
        resolve_sku_spec_from_snapshot(&lines[1], "zh"),
        "颜色: 黑色 / 尺码: M / 材质: 棉, 氨纶"
    );
}

#[test]
fn formatter_describes_lines() {
    let formatter = SkuFormatter::new(FormatConfig {
        locale: "en-US".to_string(),
        default_label: Some("Standard".to_string()),
    });
    let described: Vec<String> = order_lines()
        .as_array()
        .unwrap()
        .iter()
        .map(|line| formatter.describe(line))
        .collect();
    assert_eq!(
        described,
        vec![
            "Standard",
            "TS-BLK-M (颜色: Black / 尺码: M / 材质: Cotton, Spandex)",
            "gift-01 (Gift box)",
            r#"note: {"size":"L","fit":"slim"}"#,
        ]
    );
}

#[test]
fn whole_payload_localized() {
    let spec = json!({ "zh-CN": "红色", "en-US": "Red" });
    assert_eq!(format_sku_spec_values(&spec, "en-US"), "Red");
    assert_eq!(format_sku_spec_values(&spec, "zh-TW"), "红色");
}

#[test]
fn formatted_text_is_stable() {
    let spec = json!({ "color": { "zh-CN": "红色", "en-US": "Red" }, "tags": ["a", " b "] });
    let once = format_sku_spec_values(&spec, "en");
    let again = format_spec_value(&SpecValue::from(json!(once.clone())), "en");
    assert_eq!(once, again);
}
