//! Configuration of the separator fixer.

use dicom_core::VR;
use smallvec::{smallvec, SmallVec};
use snafu::{ensure, Backtrace, OptionExt, Snafu};

/// The standard value separator in DICOM multi-valued strings.
pub const STANDARD_SEPARATOR: u8 = b'\\';

/// An error when building separator fixer options.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The invalid separator was not specified
    #[snafu(display("Missing invalid separator byte"))]
    MissingSeparator { backtrace: Backtrace },
    /// The invalid separator is the standard one
    #[snafu(display("The invalid separator cannot be the standard backslash"))]
    StandardSeparator { backtrace: Backtrace },
    /// No element would ever be processed
    #[snafu(display("No value representations to process and unknown VRs are skipped"))]
    NothingToProcess { backtrace: Backtrace },
}

/// Options for the separator fixer hook.
///
/// Build with [`FixSeparatorOptions::builder`],
/// or [`FixSeparatorOptions::new`] for the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FixSeparatorOptions {
    invalid_separator: u8,
    for_vrs: SmallVec<[VR; 2]>,
    process_unknown_vrs: bool,
    resolve_unknown_as: Option<VR>,
}

impl FixSeparatorOptions {
    /// Create a new builder of fixer options.
    pub fn builder() -> FixSeparatorOptionsBuilder {
        FixSeparatorOptionsBuilder::new()
    }

    /// Create options for replacing the given separator
    /// in `DS` and `IS` values, as well as in values with an unknown VR.
    pub fn new(invalid_separator: u8) -> Result<Self, ConfigurationError> {
        Self::builder().invalid_separator(invalid_separator).build()
    }

    /// The byte to replace with the standard separator.
    pub fn invalid_separator(&self) -> u8 {
        self.invalid_separator
    }

    /// The value representations of the elements to fix.
    pub fn for_vrs(&self) -> &[VR] {
        &self.for_vrs
    }

    /// Whether elements with an unknown VR are fixed as well.
    pub fn process_unknown_vrs(&self) -> bool {
        self.process_unknown_vrs
    }

    /// The VR given to elements whose VR was unknown
    /// once a separator was replaced in them,
    /// or `None` to leave it unknown.
    pub fn resolve_unknown_as(&self) -> Option<VR> {
        self.resolve_unknown_as
    }
}

/// A builder for [`FixSeparatorOptions`].
#[derive(Debug, Clone)]
pub struct FixSeparatorOptionsBuilder {
    invalid_separator: Option<u8>,
    for_vrs: SmallVec<[VR; 2]>,
    process_unknown_vrs: bool,
    resolve_unknown_as: Option<VR>,
}

impl Default for FixSeparatorOptionsBuilder {
    fn default() -> Self {
        FixSeparatorOptionsBuilder {
            invalid_separator: None,
            for_vrs: smallvec![VR::DS, VR::IS],
            process_unknown_vrs: true,
            resolve_unknown_as: None,
        }
    }
}

impl FixSeparatorOptionsBuilder {
    /// Create a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the byte to replace with the standard separator.
    pub fn invalid_separator(mut self, separator: u8) -> Self {
        self.invalid_separator = Some(separator);
        self
    }

    /// Define the value representations of the elements to fix,
    /// replacing the default (`DS` and `IS`).
    pub fn for_vrs<I>(mut self, vrs: I) -> Self
    where
        I: IntoIterator<Item = VR>,
    {
        self.for_vrs = vrs.into_iter().collect();
        self.for_vrs.sort_unstable();
        self.for_vrs.dedup();
        self
    }

    /// Define whether elements with an unknown VR are fixed as well
    /// (default is `true`).
    pub fn process_unknown_vrs(mut self, process: bool) -> Self {
        self.process_unknown_vrs = process;
        self
    }

    /// Define the VR to give to elements whose VR was unknown
    /// once a separator was replaced in them.
    /// By default, the VR is left unknown.
    pub fn resolve_unknown_as(mut self, vr: VR) -> Self {
        self.resolve_unknown_as = Some(vr);
        self
    }

    /// Build the options.
    ///
    /// # Errors
    ///
    /// Fails if the invalid separator is missing or is the standard backslash,
    /// or if the options would never match any element.
    pub fn build(self) -> Result<FixSeparatorOptions, ConfigurationError> {
        let invalid_separator = self.invalid_separator.context(MissingSeparatorSnafu)?;
        ensure!(invalid_separator != STANDARD_SEPARATOR, StandardSeparatorSnafu);
        ensure!(
            !self.for_vrs.is_empty() || self.process_unknown_vrs,
            NothingToProcessSnafu
        );

        Ok(FixSeparatorOptions {
            invalid_separator,
            for_vrs: self.for_vrs,
            process_unknown_vrs: self.process_unknown_vrs,
            resolve_unknown_as: self.resolve_unknown_as,
        })
    }
}
