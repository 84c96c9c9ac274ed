//! Target description consumed by symbol emission.
//!
//! A [`TargetInfo`] is an immutable snapshot of the facts about the
//! compilation target that name mangling depends on: operating-system
//! family, instruction-set architecture, the active C++ ABI variant, and
//! the user-label prefix the object format applies to every global.
//!
//! The rest of the compiler owns target selection; this crate only
//! describes the result.

use std::fmt;

/// Operating-system family of the target triple.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OsFamily {
    Linux,
    Darwin,
    Windows,
    FreeBsd,
}

impl OsFamily {
    /// Whether this OS belongs to the Windows family.
    #[inline]
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, OsFamily::Windows)
    }
}

/// Instruction-set architecture of the target triple.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arch {
    /// 32-bit x86.
    X86,
    X86_64,
    Aarch64,
}

/// The C++ ABI variant in effect for the target.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CxxAbi {
    Itanium,
    Microsoft,
}

/// Immutable description of the compilation target.
///
/// | Target | Label prefix |
/// |--------|--------------|
/// | Linux/FreeBSD (ELF) | empty |
/// | Darwin (Mach-O) | `_` |
/// | Windows, 32-bit x86 | `_` |
/// | Windows, 64-bit | empty |
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TargetInfo {
    os: OsFamily,
    arch: Arch,
    cxx_abi: CxxAbi,
    user_label_prefix: &'static str,
}

impl TargetInfo {
    /// Describe a target, deriving the user-label prefix from the object
    /// format conventions of the OS/arch pair.
    #[must_use]
    pub const fn new(os: OsFamily, arch: Arch, cxx_abi: CxxAbi) -> Self {
        let user_label_prefix = match (os, arch) {
            (OsFamily::Darwin, _) | (OsFamily::Windows, Arch::X86) => "_",
            _ => "",
        };
        TargetInfo {
            os,
            arch,
            cxx_abi,
            user_label_prefix,
        }
    }

    /// Override the derived user-label prefix.
    #[must_use]
    pub const fn with_user_label_prefix(mut self, prefix: &'static str) -> Self {
        self.user_label_prefix = prefix;
        self
    }

    /// 32-bit Windows with the Microsoft C++ ABI.
    #[must_use]
    pub const fn windows_x86() -> Self {
        TargetInfo::new(OsFamily::Windows, Arch::X86, CxxAbi::Microsoft)
    }

    /// 64-bit Windows with the Microsoft C++ ABI.
    #[must_use]
    pub const fn windows_x86_64() -> Self {
        TargetInfo::new(OsFamily::Windows, Arch::X86_64, CxxAbi::Microsoft)
    }

    /// 64-bit Linux with the Itanium C++ ABI.
    #[must_use]
    pub const fn linux_x86_64() -> Self {
        TargetInfo::new(OsFamily::Linux, Arch::X86_64, CxxAbi::Itanium)
    }

    /// 64-bit macOS with the Itanium C++ ABI.
    #[must_use]
    pub const fn darwin_x86_64() -> Self {
        TargetInfo::new(OsFamily::Darwin, Arch::X86_64, CxxAbi::Itanium)
    }

    #[inline]
    #[must_use]
    pub const fn os(&self) -> OsFamily {
        self.os
    }

    #[inline]
    #[must_use]
    pub const fn arch(&self) -> Arch {
        self.arch
    }

    #[inline]
    #[must_use]
    pub const fn cxx_abi(&self) -> CxxAbi {
        self.cxx_abi
    }

    /// The prefix the assembler prepends to every user-level label, or
    /// the empty string when the object format uses names verbatim.
    #[inline]
    #[must_use]
    pub const fn user_label_prefix(&self) -> &'static str {
        self.user_label_prefix
    }
}

impl fmt::Display for TargetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}-{:?}", self.arch, self.os, self.cxx_abi)
    }
}
