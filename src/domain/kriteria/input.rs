//! Criterion input types.
//!
//! Each criterion is answered through exactly one widget. The variant owns
//! its own data (only `Select` has options) and its own answer rules, so no
//! caller branches on a type string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ValidationError};

/// Fixed scale of a Likert item.
pub const LIKERT_SCALE: f64 = 5.0;

/// One selectable option of a `Select` criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpsiPilihan {
    pub val: i32,
    pub label: String,
}

impl OpsiPilihan {
    pub fn new(val: i32, label: impl Into<String>) -> Self {
        Self {
            val,
            label: label.into(),
        }
    }
}

/// Input type tag as it appears on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipeInputKind {
    Number,
    Select,
    Likert,
}

impl TipeInputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipeInputKind::Number => "number",
            TipeInputKind::Select => "select",
            TipeInputKind::Likert => "likert",
        }
    }
}

impl fmt::Display for TipeInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipeInputKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" => Ok(TipeInputKind::Number),
            "select" => Ok(TipeInputKind::Select),
            "likert" => Ok(TipeInputKind::Likert),
            other => Err(ValidationError::invalid_format(
                "tipe_input",
                format!("unknown input type '{}'", other),
            )),
        }
    }
}

/// How a criterion is answered.
#[derive(Debug, Clone, PartialEq)]
pub enum TipeInput {
    /// Agreement scale 1..=5.
    Likert,
    /// Free number between 0 and the criterion scale.
    Number,
    /// One of a fixed list of options.
    Select { opsi: Vec<OpsiPilihan> },
}

/// What a form renders for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputWidget {
    Likert { min: i32, max: i32 },
    Number { min: f64, max: f64 },
    Select { options: Vec<OpsiPilihan> },
}

impl TipeInput {
    /// Assembles the variant from the wire pair `(tipe_input, opsi_pilihan)`.
    /// Options sent with a non-select type are dropped.
    pub fn from_parts(kind: TipeInputKind, opsi: Option<Vec<OpsiPilihan>>) -> Self {
        match kind {
            TipeInputKind::Likert => TipeInput::Likert,
            TipeInputKind::Number => TipeInput::Number,
            TipeInputKind::Select => TipeInput::Select {
                opsi: opsi.unwrap_or_default(),
            },
        }
    }

    pub fn kind(&self) -> TipeInputKind {
        match self {
            TipeInput::Likert => TipeInputKind::Likert,
            TipeInput::Number => TipeInputKind::Number,
            TipeInput::Select { .. } => TipeInputKind::Select,
        }
    }

    /// Options, empty for non-select types.
    pub fn opsi(&self) -> &[OpsiPilihan] {
        match self {
            TipeInput::Select { opsi } => opsi,
            _ => &[],
        }
    }

    /// Scale enforced by the type itself, if any.
    pub fn forced_scale(&self) -> Option<f64> {
        match self {
            TipeInput::Likert => Some(LIKERT_SCALE),
            _ => None,
        }
    }

    /// Checks the option list against the criterion scale.
    pub fn validate_definition(&self, skala_maks: f64) -> Result<(), DomainError> {
        if let TipeInput::Select { opsi } = self {
            if opsi.is_empty() {
                return Err(DomainError::validation(
                    "opsi_pilihan",
                    "Tipe select wajib memiliki minimal satu opsi pilihan",
                ));
            }
            for (idx, opsi) in opsi.iter().enumerate() {
                if opsi.label.trim().is_empty() {
                    return Err(DomainError::validation(
                        "opsi_pilihan",
                        format!("Label opsi ke-{} tidak boleh kosong", idx + 1),
                    ));
                }
                if f64::from(opsi.val) > skala_maks {
                    return Err(DomainError::validation(
                        "opsi_pilihan",
                        format!(
                            "Nilai opsi '{}' ({}) melebihi skala maksimal ({})",
                            opsi.label, opsi.val, skala_maks
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Checks one student answer.
    pub fn validate_answer(&self, kode: &str, value: f64, skala_maks: f64) -> Result<(), DomainError> {
        let ok = match self {
            TipeInput::Likert => value.fract() == 0.0 && (1.0..=LIKERT_SCALE).contains(&value),
            TipeInput::Number => (0.0..=skala_maks).contains(&value),
            TipeInput::Select { opsi } => opsi.iter().any(|o| f64::from(o.val) == value),
        };
        if ok {
            Ok(())
        } else {
            Err(DomainError::validation(
                kode,
                format!("Nilai {} untuk kriteria {} tidak valid", value, kode),
            ))
        }
    }

    pub fn widget(&self, skala_maks: f64) -> InputWidget {
        match self {
            TipeInput::Likert => InputWidget::Likert {
                min: 1,
                max: LIKERT_SCALE as i32,
            },
            TipeInput::Number => InputWidget::Number {
                min: 0.0,
                max: skala_maks,
            },
            TipeInput::Select { opsi } => InputWidget::Select {
                options: opsi.clone(),
            },
        }
    }
}
