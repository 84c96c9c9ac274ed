//! Source-language mode.

/// The language options symbol emission cares about.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LangOpts {
    /// Compiling C++ (structural mangling applies) rather than C.
    pub cplusplus: bool,
}

impl LangOpts {
    /// Plain C mode.
    #[must_use]
    pub const fn c() -> Self {
        LangOpts { cplusplus: false }
    }

    /// C++ mode.
    #[must_use]
    pub const fn cxx() -> Self {
        LangOpts { cplusplus: true }
    }
}
