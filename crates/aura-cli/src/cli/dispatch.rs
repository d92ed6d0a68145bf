//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command uses
//! - `Into<*Args>` impls bridge dispatch to command handlers, resolving
//!   color and target choices on the way

use std::path::PathBuf;

use aura_compiler::Target;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::build::BuildArgs;
use crate::commands::check::CheckArgs;
use crate::commands::demo::DemoArgs;
use crate::commands::prelude::PreludeArgs;
use crate::commands::run_common::Layout;
use crate::commands::types::TypesArgs;

pub struct BuildParams {
    pub program_path: PathBuf,
    pub output: Option<PathBuf>,
    pub target: Target,
    pub no_prelude: bool,
    pub indent: Option<u8>,
    pub tabs: bool,
    pub color: ColorChoice,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: parse_program_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            target: parse_target(m),
            no_prelude: m.get_flag("no_prelude"),
            indent: m.get_one::<u8>("indent").copied(),
            tabs: m.get_flag("tabs"),
            color: parse_color(m),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            color: colorize(p.color, p.output.as_ref()),
            program_path: p.program_path,
            output: p.output,
            target: p.target,
            emit_prelude: !p.no_prelude,
            layout: layout(p.indent, p.tabs),
        }
    }
}

pub struct CheckParams {
    pub program_path: PathBuf,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: parse_program_path(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            program_path: p.program_path,
        }
    }
}

pub struct PreludeParams {
    pub target: Target,
    pub output: Option<PathBuf>,
    pub indent: Option<u8>,
    pub tabs: bool,
    pub color: ColorChoice,
}

impl PreludeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            target: parse_target(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            indent: m.get_one::<u8>("indent").copied(),
            tabs: m.get_flag("tabs"),
            color: parse_color(m),
        }
    }
}

impl From<PreludeParams> for PreludeArgs {
    fn from(p: PreludeParams) -> Self {
        Self {
            color: colorize(p.color, p.output.as_ref()),
            target: p.target,
            output: p.output,
            layout: layout(p.indent, p.tabs),
        }
    }
}

pub struct TypesParams {
    pub json: bool,
    pub color: ColorChoice,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DemoParams {
    pub ir: bool,
    pub output: Option<PathBuf>,
    pub target: Target,
    pub no_prelude: bool,
    pub indent: Option<u8>,
    pub tabs: bool,
    pub color: ColorChoice,
}

impl DemoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ir: m.get_flag("ir"),
            output: m.get_one::<PathBuf>("output").cloned(),
            target: parse_target(m),
            no_prelude: m.get_flag("no_prelude"),
            indent: m.get_one::<u8>("indent").copied(),
            tabs: m.get_flag("tabs"),
            color: parse_color(m),
        }
    }
}

impl From<DemoParams> for DemoArgs {
    fn from(p: DemoParams) -> Self {
        Self {
            color: colorize(p.color, p.output.as_ref()),
            ir: p.ir,
            output: p.output,
            target: p.target,
            emit_prelude: !p.no_prelude,
            layout: layout(p.indent, p.tabs),
        }
    }
}

/// The positional is required, so clap always provides it.
fn parse_program_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("program_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_target(m: &ArgMatches) -> Target {
    m.get_one::<String>("target")
        .and_then(|s| Target::from_name(s))
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Files never get escape codes, whatever `--color` says.
fn colorize(color: ColorChoice, output: Option<&PathBuf>) -> bool {
    output.is_none() && color.should_colorize()
}

fn layout(indent: Option<u8>, tabs: bool) -> Layout {
    match (tabs, indent) {
        (true, _) => Layout::Tabs,
        (false, Some(width)) => Layout::Spaces(width),
        (false, None) => Layout::default(),
    }
}
