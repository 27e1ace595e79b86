//! Tracer header skeleton rendering.

use crate::error::{Error, Result};
use crate::hooks::{HOOK_GROUPS, Hook, Layout};
use crate::xlen::{Rv32, Rv64, Xlen, reg_type};

const PRELUDE: &str = r"#pragma once

#include <stdint.h>

typedef struct Tracer {
    /* add fields here */
} Tracer;
";

/// Render the header skeleton for tracer `name` at register width `X`.
#[must_use]
pub fn render_header<X: Xlen>(name: &str) -> String {
    let rtype = reg_type::<X>();
    let mut out = format!("/* Auto-generated tracer header skeleton for {name}. */\n");
    out.push_str(PRELUDE);
    for group in HOOK_GROUPS {
        out.push('\n');
        for hook in *group {
            push_hook(&mut out, hook, rtype);
        }
    }
    out
}

/// Render the header for a runtime XLEN value.
///
/// # Errors
///
/// Returns [`Error::UnsupportedXlen`] unless `xlen` is 32 or 64.
pub fn gen_tracer_header(name: &str, xlen: u8) -> Result<String> {
    match xlen {
        32 => Ok(render_header::<Rv32>(name)),
        64 => Ok(render_header::<Rv64>(name)),
        other => Err(Error::UnsupportedXlen(other)),
    }
}

fn push_hook(out: &mut String, hook: &Hook, rtype: &'static str) {
    let params = hook
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty.c_type(rtype), p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let body = hook
        .params
        .iter()
        .map(|p| format!("(void){};", p.name))
        .collect::<Vec<_>>()
        .join(" ");
    let name = hook.name;
    match hook.layout {
        Layout::Inline => {
            out.push_str(&format!("static inline void {name}({params}) {{ {body} }}\n"));
        }
        Layout::Wrapped => {
            out.push_str(&format!("static inline void {name}({params}) {{\n    {body}\n}}\n"));
        }
    }
}
