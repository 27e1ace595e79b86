//! End-to-end header generation against the bundled example tracer.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use rvr_tracegen::{Error, generate};

const PC_COUNT_RV64: &str = r#"/* Auto-generated tracer header skeleton for pc_count. */
#pragma once

#include <stdint.h>

typedef struct Tracer {
    /* add fields here */
} Tracer;

static inline void trace_init(Tracer* t) { (void)t; }
static inline void trace_fini(Tracer* t) { (void)t; }

static inline void trace_block(Tracer* t, uint64_t pc) { (void)t; (void)pc; }
static inline void trace_pc(Tracer* t, uint64_t pc, uint16_t op) { (void)t; (void)pc; (void)op; }
static inline void trace_opcode(Tracer* t, uint64_t pc, uint16_t op, uint32_t opcode) { (void)t; (void)pc; (void)op; (void)opcode; }

static inline void trace_reg_read(Tracer* t, uint64_t pc, uint16_t op, uint8_t reg, uint64_t value) {
    (void)t; (void)pc; (void)op; (void)reg; (void)value;
}
static inline void trace_reg_write(Tracer* t, uint64_t pc, uint16_t op, uint8_t reg, uint64_t value) {
    (void)t; (void)pc; (void)op; (void)reg; (void)value;
}

static inline void trace_mem_read_byte(Tracer* t, uint64_t pc, uint16_t op, uint64_t addr, uint8_t value) {
    (void)t; (void)pc; (void)op; (void)addr; (void)value;
}
static inline void trace_mem_read_halfword(Tracer* t, uint64_t pc, uint16_t op, uint64_t addr, uint16_t value) {
    (void)t; (void)pc; (void)op; (void)addr; (void)value;
}
static inline void trace_mem_read_word(Tracer* t, uint64_t pc, uint16_t op, uint64_t addr, uint32_t value) {
    (void)t; (void)pc; (void)op; (void)addr; (void)value;
}
static inline void trace_mem_read_dword(Tracer* t, uint64_t pc, uint16_t op, uint64_t addr, uint64_t value) {
    (void)t; (void)pc; (void)op; (void)addr; (void)value;
}

static inline void trace_mem_write_byte(Tracer* t, uint64_t pc, uint16_t op, uint64_t addr, uint8_t value) {
    (void)t; (void)pc; (void)op; (void)addr; (void)value;
}
static inline void trace_mem_write_halfword(Tracer* t, uint64_t pc, uint16_t op, uint64_t addr, uint16_t value) {
    (void)t; (void)pc; (void)op; (void)addr; (void)value;
}
static inline void trace_mem_write_word(Tracer* t, uint64_t pc, uint16_t op, uint64_t addr, uint32_t value) {
    (void)t; (void)pc; (void)op; (void)addr; (void)value;
}
static inline void trace_mem_write_dword(Tracer* t, uint64_t pc, uint16_t op, uint64_t addr, uint64_t value) {
    (void)t; (void)pc; (void)op; (void)addr; (void)value;
}

static inline void trace_branch_taken(Tracer* t, uint64_t pc, uint16_t op, uint64_t target) {
    (void)t; (void)pc; (void)op; (void)target;
}
static inline void trace_branch_not_taken(Tracer* t, uint64_t pc, uint16_t op, uint64_t target) {
    (void)t; (void)pc; (void)op; (void)target;
}

static inline void trace_csr_read(Tracer* t, uint64_t pc, uint16_t op, uint16_t csr, uint64_t value) {
    (void)t; (void)pc; (void)op; (void)csr; (void)value;
}
static inline void trace_csr_write(Tracer* t, uint64_t pc, uint16_t op, uint16_t csr, uint64_t value) {
    (void)t; (void)pc; (void)op; (void)csr; (void)value;
}
"#;

fn pc_count_tracer() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tracers/rust/pc_count.rs")
}

#[test]
fn test_pc_count_rv64_header() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = temp.path().join("pc_count.h");

    let generated = generate(pc_count_tracer(), &output, 64).expect("generate");
    assert_eq!(generated.name, "pc_count");
    assert_eq!(generated.path, output);
    assert_eq!(fs::read_to_string(&output).unwrap(), PC_COUNT_RV64);
}

#[test]
fn test_pc_count_rv32_header() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = temp.path().join("pc_count.h");

    generate(pc_count_tracer(), &output, 32).expect("generate");
    let header = fs::read_to_string(&output).unwrap();
    // Only the register type differs; dword memory values stay 64-bit.
    assert_eq!(
        header.replace("uint64_t", "uint32_t"),
        PC_COUNT_RV64.replace("uint64_t", "uint32_t")
    );
    assert!(header.contains(
        "trace_mem_write_dword(Tracer* t, uint32_t pc, uint16_t op, uint32_t addr, uint64_t value)"
    ));
    assert_eq!(header.matches("uint64_t").count(), 2);
}

#[test]
fn test_declared_name_in_comment() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let input = temp.path().join("core.rs");
    let output = temp.path().join("core.h");
    fs::write(&input, "pub const TRACER_NAME: &str = \"rv64im\";\n").unwrap();

    let generated = generate(&input, &output, 64).expect("generate");
    assert_eq!(generated.name, "rv64im");
    let header = fs::read_to_string(&output).unwrap();
    assert!(header.starts_with("/* Auto-generated tracer header skeleton for rv64im. */\n"));
}

#[test]
fn test_fallback_to_file_stem() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let input = temp.path().join("mytracer.src");
    let output = temp.path().join("mytracer.h");
    fs::write(&input, "struct NoName;\n").unwrap();

    let generated = generate(&input, &output, 64).expect("generate");
    assert_eq!(generated.name, "mytracer");
    let header = fs::read_to_string(&output).unwrap();
    assert!(header.contains("skeleton for mytracer. */"));
}

#[test]
fn test_overwrites_and_is_deterministic() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = temp.path().join("pc_count.h");
    fs::write(&output, "stale contents that are much longer than nothing").unwrap();

    generate(pc_count_tracer(), &output, 64).expect("first run");
    let first = fs::read(&output).unwrap();
    generate(pc_count_tracer(), &output, 64).expect("second run");
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, PC_COUNT_RV64.as_bytes());
}

#[test]
fn test_missing_input_is_read_error() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = temp.path().join("out.h");

    let err = generate(temp.path().join("missing.rs"), &output, 64).unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "{err}");
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_write_error() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = temp.path().join("no/such/dir/out.h");

    let err = generate(pc_count_tracer(), &output, 64).unwrap_err();
    assert!(matches!(err, Error::Write { .. }), "{err}");
}

#[test]
fn test_cli_exit_codes() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = temp.path().join("pc_count.h");
    let bin = env!("CARGO_BIN_EXE_rvr-tracegen");

    let status = Command::new(bin)
        .arg(pc_count_tracer())
        .arg(&output)
        .status()
        .expect("spawn rvr-tracegen");
    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), PC_COUNT_RV64);

    let status = Command::new(bin)
        .arg(temp.path().join("missing.rs"))
        .arg(&output)
        .args(["--xlen", "32", "--silent"])
        .status()
        .expect("spawn rvr-tracegen");
    assert_eq!(status.code(), Some(1));
}
