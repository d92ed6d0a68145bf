use aura_core::{Colors, Primitive, PrimitiveInfo};

use super::run_common::{exit_with_write_error, write_output};

pub struct TypesArgs {
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TypesArgs) {
    let text = render(&args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = write_output(None, &text) {
        exit_with_write_error(None, &e);
    }
}

/// The text `run` writes to stdout.
pub fn render(args: &TypesArgs) -> serde_json::Result<String> {
    if args.json {
        render_json()
    } else {
        Ok(render_table(Colors::new(args.color)))
    }
}

const NAME_WIDTH: usize = 8;
const C_WIDTH: usize = 12;
const RUST_WIDTH: usize = 18;

/// One row per alias: name, C spelling, Rust spelling, width in bits.
pub fn render_table(c: Colors) -> String {
    let mut out = String::new();
    out.push_str(&c.paint(
        c.dim,
        &format!(
            "{:<NAME_WIDTH$} {:<C_WIDTH$} {:<RUST_WIDTH$} BITS",
            "NAME", "C", "RUST"
        ),
    ));
    out.push('\n');

    for p in Primitive::ALL {
        let bits = p.bits().map_or_else(|| "-".to_owned(), |b| b.to_string());
        // Pad before painting so escape codes don't count toward the width.
        let name = format!("{:<NAME_WIDTH$}", p.name());
        let c_type = format!("{:<C_WIDTH$}", p.c_type());
        let rust_type = format!("{:<RUST_WIDTH$}", p.rust_type());
        out.push_str(&format!(
            "{} {} {} {}\n",
            c.paint(c.blue, &name),
            c.paint(c.green, &c_type),
            c.paint(c.green, &rust_type),
            c.paint(c.dim, &bits),
        ));
    }
    out
}

pub fn render_json() -> serde_json::Result<String> {
    let rows: Vec<PrimitiveInfo> = Primitive::ALL.into_iter().map(Primitive::info).collect();
    let mut json = serde_json::to_string_pretty(&rows)?;
    json.push('\n');
    Ok(json)
}
