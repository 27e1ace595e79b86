//! Tracer hook surface.
//!
//! Mirrors the functions every C tracer header must provide. Groups are
//! emitted in order, separated by a blank line.

/// Type of a hook parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    /// `Tracer*`
    Tracer,
    /// Full-width register: `uint32_t` or `uint64_t` depending on XLEN.
    Reg,
    /// Width-independent C type.
    Fixed(&'static str),
}

impl ParamType {
    /// C type spelling for the given register type.
    #[must_use]
    pub const fn c_type(self, rtype: &'static str) -> &'static str {
        match self {
            Self::Tracer => "Tracer*",
            Self::Reg => rtype,
            Self::Fixed(ty) => ty,
        }
    }
}

/// Hook parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub ty: ParamType,
}

impl Param {
    const fn new(name: &'static str, ty: ParamType) -> Self {
        Self { name, ty }
    }

    const fn reg(name: &'static str) -> Self {
        Self::new(name, ParamType::Reg)
    }

    const fn fixed(name: &'static str, ty: &'static str) -> Self {
        Self::new(name, ParamType::Fixed(ty))
    }
}

/// How a stub body is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Body on the signature line.
    Inline,
    /// Body on its own indented line.
    Wrapped,
}

/// A single `static inline void` stub.
#[derive(Clone, Copy, Debug)]
pub struct Hook {
    pub name: &'static str,
    pub params: &'static [Param],
    pub layout: Layout,
}

impl Hook {
    const fn inline(name: &'static str, params: &'static [Param]) -> Self {
        Self {
            name,
            params,
            layout: Layout::Inline,
        }
    }

    const fn wrapped(name: &'static str, params: &'static [Param]) -> Self {
        Self {
            name,
            params,
            layout: Layout::Wrapped,
        }
    }
}

const T: Param = Param::new("t", ParamType::Tracer);
const PC: Param = Param::reg("pc");
const OP: Param = Param::fixed("op", "uint16_t");
const ADDR: Param = Param::reg("addr");
const VALUE: Param = Param::reg("value");
const TARGET: Param = Param::reg("target");
const OPCODE: Param = Param::fixed("opcode", "uint32_t");
const REG: Param = Param::fixed("reg", "uint8_t");
const CSR: Param = Param::fixed("csr", "uint16_t");
const U8_VALUE: Param = Param::fixed("value", "uint8_t");
const U16_VALUE: Param = Param::fixed("value", "uint16_t");
const U32_VALUE: Param = Param::fixed("value", "uint32_t");
const U64_VALUE: Param = Param::fixed("value", "uint64_t");

const MEM_BYTE: &[Param] = &[T, PC, OP, ADDR, U8_VALUE];
const MEM_HALFWORD: &[Param] = &[T, PC, OP, ADDR, U16_VALUE];
const MEM_WORD: &[Param] = &[T, PC, OP, ADDR, U32_VALUE];
const MEM_DWORD: &[Param] = &[T, PC, OP, ADDR, U64_VALUE];

const REG_ACCESS: &[Param] = &[T, PC, OP, REG, VALUE];
const BRANCH: &[Param] = &[T, PC, OP, TARGET];
const CSR_ACCESS: &[Param] = &[T, PC, OP, CSR, VALUE];

/// Tracer init/teardown.
pub const LIFECYCLE: &[Hook] = &[Hook::inline("trace_init", &[T]), Hook::inline("trace_fini", &[T])];

/// Block entry and instruction dispatch.
pub const DISPATCH: &[Hook] = &[
    Hook::inline("trace_block", &[T, PC]),
    Hook::inline("trace_pc", &[T, PC, OP]),
    Hook::inline("trace_opcode", &[T, PC, OP, OPCODE]),
];

pub const REGISTERS: &[Hook] = &[
    Hook::wrapped("trace_reg_read", REG_ACCESS),
    Hook::wrapped("trace_reg_write", REG_ACCESS),
];

pub const MEMORY_READS: &[Hook] = &[
    Hook::wrapped("trace_mem_read_byte", MEM_BYTE),
    Hook::wrapped("trace_mem_read_halfword", MEM_HALFWORD),
    Hook::wrapped("trace_mem_read_word", MEM_WORD),
    Hook::wrapped("trace_mem_read_dword", MEM_DWORD),
];

pub const MEMORY_WRITES: &[Hook] = &[
    Hook::wrapped("trace_mem_write_byte", MEM_BYTE),
    Hook::wrapped("trace_mem_write_halfword", MEM_HALFWORD),
    Hook::wrapped("trace_mem_write_word", MEM_WORD),
    Hook::wrapped("trace_mem_write_dword", MEM_DWORD),
];

/// Control flow.
pub const BRANCHES: &[Hook] = &[
    Hook::wrapped("trace_branch_taken", BRANCH),
    Hook::wrapped("trace_branch_not_taken", BRANCH),
];

pub const CSRS: &[Hook] = &[
    Hook::wrapped("trace_csr_read", CSR_ACCESS),
    Hook::wrapped("trace_csr_write", CSR_ACCESS),
];

/// All hook groups in emission order.
pub const HOOK_GROUPS: &[&[Hook]] = &[
    LIFECYCLE,
    DISPATCH,
    REGISTERS,
    MEMORY_READS,
    MEMORY_WRITES,
    BRANCHES,
    CSRS,
];

/// Iterate over every hook in emission order.
pub fn all_hooks() -> impl Iterator<Item = &'static Hook> {
    HOOK_GROUPS.iter().flat_map(|group| group.iter())
}
