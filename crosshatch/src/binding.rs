//! Live-editable parameters.
//!
//! A [`ParameterBinding`] owns the authoritative [`HatchParameters`] and exposes them as
//! named tunables a host UI can bind controls to. Writes are applied immediately; readers
//! take whole-struct snapshots so they never see a half-applied update.

use std::{
    str::FromStr,
    sync::{Arc, RwLock},
};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{math::Spectrum, params::HatchParameters};

/// The recognized tunables, named as a host UI would label them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Tunable {
    #[strum(serialize = "roughness")]
    Roughness,
    #[strum(serialize = "metalness")]
    Metalness,
    #[strum(serialize = "inkColor")]
    InkColor,
    #[strum(serialize = "scale")]
    Scale,
}

/// Value kinds a tunable can hold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TunableValue {
    Float(f32),
    Color(Spectrum<f32>),
}

/// Inclusive slider range with an optional step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TunableRange {
    pub min: f32,
    pub max: f32,
    pub step: Option<f32>,
}

impl TunableRange {
    /// Clamps `v` into the range and snaps it to the step if there is one.
    pub fn apply(&self, v: f32) -> f32 {
        let v = if v.is_finite() { v } else { self.min };
        let v = v.clamp(self.min, self.max);
        match self.step {
            Some(step) => (((v - self.min) / step).round() * step + self.min).min(self.max),
            None => v,
        }
    }
}

/// What a host UI needs to build a control for a tunable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TunableDescriptor {
    Float { tunable: Tunable, range: TunableRange },
    Color { tunable: Tunable },
}

impl TunableDescriptor {
    pub fn tunable(&self) -> Tunable {
        match self {
            TunableDescriptor::Float { tunable, .. } | TunableDescriptor::Color { tunable } => {
                *tunable
            }
        }
    }
}

impl Tunable {
    /// Returns the control description of this `Tunable`.
    pub fn descriptor(self) -> TunableDescriptor {
        let unit = TunableRange {
            min: 0.0,
            max: 1.0,
            step: None,
        };
        match self {
            Tunable::Roughness | Tunable::Metalness => TunableDescriptor::Float {
                tunable: self,
                range: unit,
            },
            Tunable::InkColor => TunableDescriptor::Color { tunable: self },
            Tunable::Scale => TunableDescriptor::Float {
                tunable: self,
                range: TunableRange {
                    min: 10.0,
                    max: 30.0,
                    step: Some(0.01),
                },
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("Unknown tunable '{0}'")]
    UnknownTunable(String),
    #[error("Tunable '{tunable}' expects a {expected} value")]
    WrongValueKind {
        tunable: Tunable,
        expected: &'static str,
    },
}

/// Single-writer, many-reader holder of the live [`HatchParameters`].
///
/// Cloning gives another handle to the same parameters.
#[derive(Clone, Debug, Default)]
pub struct ParameterBinding {
    params: Arc<RwLock<HatchParameters>>,
}

impl ParameterBinding {
    pub fn new(initial: HatchParameters) -> Self {
        Self {
            params: Arc::new(RwLock::new(initial)),
        }
    }

    /// Lists the controls for every tunable.
    pub fn descriptors() -> Vec<TunableDescriptor> {
        Tunable::iter().map(Tunable::descriptor).collect()
    }

    /// Returns a full copy of the current parameters.
    pub fn snapshot(&self) -> HatchParameters {
        // Writes replace whole fields so a poisoned lock still holds a consistent value
        match self.params.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Sets the tunable named `name`, e.g. `"scale"` or `"inkColor"`.
    pub fn set(&self, name: &str, value: TunableValue) -> Result<(), BindingError> {
        let tunable = Tunable::from_str(name)
            .map_err(|_| BindingError::UnknownTunable(name.to_string()))?;
        self.set_tunable(tunable, value)
    }

    /// Sets `tunable` to `value`, clamped to the tunable's range.
    pub fn set_tunable(&self, tunable: Tunable, value: TunableValue) -> Result<(), BindingError> {
        match (tunable.descriptor(), value) {
            (TunableDescriptor::Float { range, .. }, TunableValue::Float(v)) => {
                let clamped = range.apply(v);
                if (clamped - v).abs() > range.step.unwrap_or(0.0) {
                    hatch_warn!("{} value {} clamped to {}", tunable, v, clamped);
                }
                self.update(|params| {
                    if let Some(field) = float_field(params, tunable) {
                        *field = clamped;
                    }
                });
                hatch_debug!("{} set to {}", tunable, clamped);
                Ok(())
            }
            (TunableDescriptor::Color { .. }, TunableValue::Color(c)) => {
                let clamped = c.map(|v| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 });
                self.update(|params| params.ink_color = clamped);
                hatch_debug!("{} set to #{:06X}", tunable, clamped.to_hex());
                Ok(())
            }
            (TunableDescriptor::Float { .. }, TunableValue::Color(_)) => {
                Err(BindingError::WrongValueKind {
                    tunable,
                    expected: "float",
                })
            }
            (TunableDescriptor::Color { .. }, TunableValue::Float(_)) => {
                Err(BindingError::WrongValueKind {
                    tunable,
                    expected: "color",
                })
            }
        }
    }

    /// Forwarded to the underlying surface roughness.
    pub fn set_roughness(&self, v: f32) {
        self.set_float(Tunable::Roughness, v);
    }

    /// Forwarded to the underlying surface metalness.
    pub fn set_metalness(&self, v: f32) {
        self.set_float(Tunable::Metalness, v);
    }

    pub fn set_ink_color(&self, c: Spectrum<f32>) {
        // Kinds always match here
        let _ = self.set_tunable(Tunable::InkColor, TunableValue::Color(c));
    }

    /// Sets the stroke scale, clamped to `[10, 30]` in steps of `0.01`.
    pub fn set_scale(&self, v: f32) {
        self.set_float(Tunable::Scale, v);
    }

    fn set_float(&self, tunable: Tunable, v: f32) {
        let _ = self.set_tunable(tunable, TunableValue::Float(v));
    }

    fn update<F: FnOnce(&mut HatchParameters)>(&self, f: F) {
        let mut guard = match self.params.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard);
    }
}

fn float_field(params: &mut HatchParameters, tunable: Tunable) -> Option<&mut f32> {
    match tunable {
        Tunable::Roughness => Some(&mut params.roughness),
        Tunable::Metalness => Some(&mut params.metalness),
        Tunable::Scale => Some(&mut params.scale),
        Tunable::InkColor => None,
    }
}
