//! DTOs for courses_sea adapter.
//!
//! Per-hole arrays arrive already encoded as JSON text; the repo owns the encoding.

#[derive(Debug, Clone)]
pub struct CourseCreate {
    pub name: String,
    pub country: Option<String>,
    pub slope_rating: Option<f64>,
    pub hole_pars: String,
    pub hole_stroke_indices: String,
}

#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub country: Option<Option<String>>,
    pub slope_rating: Option<Option<f64>>,
    pub hole_pars: Option<String>,
    pub hole_stroke_indices: Option<String>,
}
