//! Built-in practice personas.

use super::model::Persona;
use crate::session::TimeWindow;

/// Returns the built-in prospects used when no scenario is supplied:
/// - **Dana Ortiz**: busy office manager with a short fuse
/// - **Priya Raman**: detail-oriented CFO who needs approval from above
pub fn get_default_presets() -> Vec<Persona> {
    vec![
        Persona {
            name: "Dana Ortiz".to_string(),
            role: "Office Manager".to_string(),
            background: "Runs payroll for a 40-person dental group on spreadsheets and a legacy desktop tool. Has been burned by a vendor migration before.".to_string(),
            company: "Acme Dental Group".to_string(),
            difficulty: "Medium".to_string(),
            time_window: TimeWindow::UnderFive,
        },
        Persona {
            name: "Priya Raman".to_string(),
            role: "Chief Financial Officer".to_string(),
            background: "Oversees finance for a 200-employee logistics firm expanding into two new states. Any new vendor needs sign-off from the CEO.".to_string(),
            company: "Northwind Freight".to_string(),
            difficulty: "Hard".to_string(),
            time_window: TimeWindow::TenToFifteen,
        },
    ]
}
