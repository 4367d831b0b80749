//! Handlers for school master data: majors, their static criterion values,
//! alumni and settings.

mod alumni;
mod jurusan;
mod settings;
mod static_values;

pub use alumni::{
    CreateAlumniHandler, DeleteAlumniHandler, SearchAlumniHandler, SearchAlumniQuery,
    UpdateAlumniHandler,
};
pub use jurusan::{
    CreateJurusanHandler, DeleteJurusanHandler, ListJurusanHandler, UpdateJurusanHandler,
};
pub use settings::{GetSettingsHandler, UpdateSettingsHandler};
pub use static_values::{
    GetStaticValuesHandler, SaveStaticValuesCommand, SaveStaticValuesHandler, StaticValueRow,
    StaticValues,
};
