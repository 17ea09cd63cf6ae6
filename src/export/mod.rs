mod chart;
mod csv_export;

pub(crate) use chart::{render_category_pie, render_monthly_trend};
pub(crate) use csv_export::export_csv;
