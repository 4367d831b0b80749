//! Criterion definition and its validation rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, KriteriaId};

use super::{JalurSet, OpsiPilihan, TipeInput, TipeInputKind};

macro_rules! storage_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn parse(raw: &str) -> Option<Self> {
                match raw.trim() {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

storage_enum!(
    /// Whether a higher value helps (`benefit`) or hurts (`cost`) a pathway.
    Atribut { Benefit => "benefit", Cost => "cost" }
);

storage_enum!(
    /// Grouping shown on the questionnaire.
    Kategori { Akademik => "akademik", Kuesioner => "kuesioner" }
);

storage_enum!(
    /// Where a criterion value comes from.
    SumberNilai { InputSiswa => "input_siswa", StaticJurusan => "static_jurusan" }
);

storage_enum!(
    /// Which expert group owns a criterion.
    PenanggungJawab { Gurubk => "gurubk", Kaprodi => "kaprodi", Umum => "umum" }
);

/// Editable part of a criterion, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct KriteriaDraft {
    pub kode: String,
    pub nama: String,
    pub pertanyaan: Option<String>,
    pub tipe_input: TipeInputKind,
    pub opsi_pilihan: Option<Vec<OpsiPilihan>>,
    pub atribut: Atribut,
    pub kategori: Kategori,
    pub sumber_nilai: SumberNilai,
    pub tampil_di_siswa: bool,
    pub penanggung_jawab: PenanggungJawab,
    pub skala_maks: f64,
    pub target_jalur: JalurSet,
    pub jalur_reverse: JalurSet,
}

/// A validated criterion body without its id.
#[derive(Debug, Clone, PartialEq)]
pub struct KriteriaDefinition {
    pub kode: String,
    pub nama: String,
    pub pertanyaan: Option<String>,
    pub tipe_input: TipeInput,
    pub atribut: Atribut,
    pub kategori: Kategori,
    pub sumber_nilai: SumberNilai,
    pub tampil_di_siswa: bool,
    pub penanggung_jawab: PenanggungJawab,
    pub skala_maks: f64,
    pub target_jalur: JalurSet,
    pub jalur_reverse: JalurSet,
}

impl KriteriaDraft {
    /// Applies every definition rule:
    ///
    /// - kode and nama are non-empty
    /// - likert forces `skala_maks` to 5
    /// - select has at least one option, non-empty labels, values within scale
    /// - at least one target pathway
    pub fn validate(self) -> Result<KriteriaDefinition, DomainError> {
        let kode = self.kode.trim().to_string();
        let nama = self.nama.trim().to_string();
        if kode.is_empty() || nama.is_empty() {
            return Err(DomainError::validation(
                if kode.is_empty() { "kode" } else { "nama" },
                "Kode dan nama kriteria wajib diisi",
            ));
        }

        let tipe_input = TipeInput::from_parts(self.tipe_input, self.opsi_pilihan);
        let skala_maks = tipe_input.forced_scale().unwrap_or(self.skala_maks);
        if !(skala_maks > 0.0) {
            return Err(DomainError::validation(
                "skala_maks",
                "Skala maksimal harus lebih dari 0",
            ));
        }
        tipe_input.validate_definition(skala_maks)?;

        if self.target_jalur.is_empty() {
            return Err(DomainError::validation(
                "target_jalur",
                "Pilih minimal satu target jalur",
            ));
        }

        let pertanyaan = self
            .pertanyaan
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(KriteriaDefinition {
            kode,
            nama,
            pertanyaan,
            tipe_input,
            atribut: self.atribut,
            kategori: self.kategori,
            sumber_nilai: self.sumber_nilai,
            tampil_di_siswa: self.tampil_di_siswa,
            penanggung_jawab: self.penanggung_jawab,
            skala_maks,
            target_jalur: self.target_jalur,
            jalur_reverse: self.jalur_reverse,
        })
    }
}

/// A stored criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Kriteria {
    pub id: KriteriaId,
    pub kode: String,
    pub nama: String,
    pub pertanyaan: Option<String>,
    pub tipe_input: TipeInput,
    pub atribut: Atribut,
    pub kategori: Kategori,
    pub sumber_nilai: SumberNilai,
    pub tampil_di_siswa: bool,
    pub penanggung_jawab: PenanggungJawab,
    pub skala_maks: f64,
    pub target_jalur: JalurSet,
    pub jalur_reverse: JalurSet,
}

impl Kriteria {
    pub fn from_definition(id: KriteriaId, def: KriteriaDefinition) -> Self {
        Self {
            id,
            kode: def.kode,
            nama: def.nama,
            pertanyaan: def.pertanyaan,
            tipe_input: def.tipe_input,
            atribut: def.atribut,
            kategori: def.kategori,
            sumber_nilai: def.sumber_nilai,
            tampil_di_siswa: def.tampil_di_siswa,
            penanggung_jawab: def.penanggung_jawab,
            skala_maks: def.skala_maks,
            target_jalur: def.target_jalur,
            jalur_reverse: def.jalur_reverse,
        }
    }

    /// Applies an update. The code is a join key for static major values
    /// and is never changed once created.
    pub fn apply_update(&mut self, def: KriteriaDefinition) {
        let kode = std::mem::take(&mut self.kode);
        *self = Kriteria::from_definition(self.id, KriteriaDefinition { kode, ..def });
    }

    pub fn is_static(&self) -> bool {
        self.sumber_nilai == SumberNilai::StaticJurusan
    }

    pub fn is_benefit(&self) -> bool {
        self.atribut == Atribut::Benefit
    }
}
