//! Error accumulation across independent parsers.
//!
//! Every element of the tuple handed to [`validate_all`] has already been evaluated, so no
//! parser is ever skipped because an earlier one failed. Failures come back in argument order.

use std::fmt;

use crate::domain::validation::ValidationError;

/// Non-empty, ordered list of validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Separator used when the failures are reported in a single message.
    pub const SEPARATOR: &'static str = "; ";

    /// Wrap a single failure.
    pub fn one(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// Build from a list, returning `None` for an empty one.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }

    /// All messages joined with `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined(Self::SEPARATOR))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(value: ValidationError) -> Self {
        Self::one(value)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A tuple of parse results that can be combined into one all-or-nothing result.
pub trait ValidateAll {
    type Output;

    fn validate_all(self) -> Result<Self::Output, ValidationErrors>;
}

/// Combine already-evaluated parse results, collecting every failure.
///
/// Element errors may be a single [`ValidationError`] or a nested [`ValidationErrors`]; nested
/// lists are flattened in place.
pub fn validate_all<T: ValidateAll>(results: T) -> Result<T::Output, ValidationErrors> {
    results.validate_all()
}

fn take<V, E>(result: Result<V, E>, errors: &mut Vec<ValidationError>) -> Option<V>
where
    E: Into<ValidationErrors>,
{
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let err: ValidationErrors = err.into();
            errors.extend(err);
            None
        }
    }
}

macro_rules! impl_validate_all {
    ($($value:ident $err:ident),+) => {
        impl<$($value, $err),+> ValidateAll for ($(Result<$value, $err>,)+)
        where
            $($err: Into<ValidationErrors>,)+
        {
            type Output = ($($value,)+);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Result<Self::Output, ValidationErrors> {
                let ($($value,)+) = self;
                let mut errors = Vec::new();
                $(let $value = take($value, &mut errors);)+
                match ($($value,)+) {
                    ($(Some($value),)+) => Ok(($($value,)+)),
                    _ => Err(ValidationErrors(errors)),
                }
            }
        }
    };
}

impl_validate_all!(A EA);
impl_validate_all!(A EA, B EB);
impl_validate_all!(A EA, B EB, C EC);
impl_validate_all!(A EA, B EB, C EC, D ED);
impl_validate_all!(A EA, B EB, C EC, D ED, E EE);
impl_validate_all!(A EA, B EB, C EC, D ED, E EE, F EF);
impl_validate_all!(A EA, B EB, C EC, D ED, E EE, F EF, G EG);
impl_validate_all!(A EA, B EB, C EC, D ED, E EE, F EF, G EG, H EH);
impl_validate_all!(A EA, B EB, C EC, D ED, E EE, F EF, G EG, H EH, I EI);
impl_validate_all!(A EA, B EB, C EC, D ED, E EE, F EF, G EG, H EH, I EI, J EJ);
impl_validate_all!(A EA, B EB, C EC, D ED, E EE, F EF, G EG, H EH, I EI, J EJ, K EK);
impl_validate_all!(A EA, B EB, C EC, D ED, E EE, F EF, G EG, H EH, I EI, J EJ, K EK, L EL);
impl_validate_all!(
    A EA, B EB, C EC, D ED, E EE, F EF, G EG, H EH, I EI, J EJ, K EK, L EL, M EM
);
impl_validate_all!(
    A EA, B EB, C EC, D ED, E EE, F EF, G EG, H EH, I EI, J EJ, K EK, L EL, M EM, N EN
);
