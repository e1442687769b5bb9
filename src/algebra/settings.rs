use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Numerical settings shared by the sparse store, the dispatcher and the factorizations.
///
/// Settings are always passed explicitly.  Use [`AlgebraSettingsBuilder`] to
/// override the defaults:
///
/// ```
/// use lamina::algebra::*;
///
/// let settings = AlgebraSettingsBuilder::<f64>::default()
///     .tolerance(1e-12)
///     .build()
///     .unwrap();
/// assert_eq!(settings.tolerance, 1e-12);
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlgebraSettings<T: FloatT> {
    ///values with magnitude at or below this threshold are treated as zero
    #[builder(default = "(1e-10).as_T()")]
    pub tolerance: T,
}

impl<T> Default for AlgebraSettings<T>
where
    T: FloatT,
{
    fn default() -> AlgebraSettings<T> {
        AlgebraSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> AlgebraSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_tolerance(self.tolerance)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for AlgebraSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        AlgebraSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> AlgebraSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that the tolerance is finite and non-negative
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tolerance) = self.tolerance {
            validate_tolerance(tolerance)?;
        }
        Ok(())
    }
}

fn validate_tolerance<T: FloatT>(tolerance: T) -> Result<(), SettingsError> {
    if !tolerance.is_finite() || tolerance < T::zero() {
        return Err(SettingsError::BadField("tolerance"));
    }
    Ok(())
}

#[test]
fn test_settings_validate() {
    // all standard settings
    AlgebraSettingsBuilder::<f64>::default().build().unwrap();

    // fail on a negative tolerance
    assert!(AlgebraSettingsBuilder::<f64>::default()
        .tolerance(-1.0)
        .build()
        .is_err());

    // fail on a non-finite tolerance
    assert!(AlgebraSettingsBuilder::<f32>::default()
        .tolerance(f32::NAN)
        .build()
        .is_err());

    // zero is allowed
    let settings = AlgebraSettingsBuilder::<f64>::default()
        .tolerance(0.0)
        .build()
        .unwrap();
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_default() {
    let settings = AlgebraSettings::<f64>::default();
    assert_eq!(settings.tolerance, 1e-10);
}
