use aura_core::Colors;

use super::types::{TypesArgs, render, render_json, render_table};

#[test]
fn table_lists_every_alias() {
    let out = render_table(Colors::OFF);
    insta::assert_snapshot!(out, @r"
    NAME     C            RUST               BITS
    Bool     bool         bool               8
    Int      int32_t      i32                32
    UInt     uint32_t     u32                32
    Int8     int8_t       i8                 8
    Int16    int16_t      i16                16
    Int32    int32_t      i32                32
    Int64    int64_t      i64                64
    UInt8    uint8_t      u8                 8
    UInt16   uint16_t     u16                16
    UInt32   uint32_t     u32                32
    UInt64   uint64_t     u64                64
    Float    float        f32                32
    Float32  float        f32                32
    Float64  double       f64                64
    Char     char         core::ffi::c_char  8
    String   const char*  &'a str            -
    Atom     uint64_t     u64                64
    Void     void         ()                 0
    ");
}

#[test]
fn colored_table_keeps_column_widths() {
    let out = render_table(Colors::ON);
    let line = out.lines().nth(1).unwrap();
    assert_eq!(
        line,
        "\x1b[34mBool    \x1b[0m \x1b[32mbool        \x1b[0m \x1b[32mbool              \x1b[0m \x1b[2m8\x1b[0m"
    );
}

#[test]
fn json_rows() {
    let json = render_json().unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(rows.len(), 18);
    assert_eq!(
        rows[15],
        serde_json::json!({
            "name": "String",
            "c": "const char*",
            "rust": "&'a str",
            "kind": "text",
            "bits": null,
        })
    );
    assert_eq!(rows[16]["kind"], "unsigned");
    assert!(json.ends_with("]\n"));
}

#[test]
fn render_picks_format() {
    let table = render(&TypesArgs {
        json: false,
        color: false,
    })
    .unwrap();
    assert_eq!(table, render_table(Colors::OFF));

    let json = render(&TypesArgs {
        json: true,
        color: true,
    })
    .unwrap();
    assert_eq!(json, render_json().unwrap());
    assert!(!json.contains('\x1b'));
}
