//! Dashboard header with title and data export.

use dioxus::prelude::*;
use empleo_chart_ui::js_bridge;
use empleo_data::datasets;

/// Top banner with the dashboard title and the "Exportar Datos" button.
///
/// The export bundles every dataset plus a generation timestamp into one
/// JSON document and hands it to the browser as a download.
#[component]
pub fn DashboardHeader() -> Element {
    let on_export = move |_| {
        let generated_at = js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default();
        let payload = serde_json::json!({
            "fecha_generacion": generated_at,
            "metricas": datasets::METRICS,
            "estadisticas_mensuales": datasets::EMPLOYMENT_SERIES,
            "datos_sectores": datasets::SECTORS,
            "historico": datasets::HISTORICAL_SERIES,
            "ofertas_laborales": datasets::JOB_POSTINGS,
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => js_bridge::download_json("datos_empleabilidad.json", &json),
            Err(e) => log::error!("export serialization failed: {}", e),
        }
    };

    rsx! {
        header {
            style: "background: #FFFFFF; border-bottom: 1px solid #E0E0E0;",
            div {
                style: "max-width: 1100px; margin: 0 auto; padding: 20px 16px; display: flex; align-items: center; justify-content: space-between;",
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    div {
                        style: "width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; border-radius: 10px; background: #1565C0; font-size: 20px;",
                        "💼"
                    }
                    div {
                        h1 {
                            style: "margin: 0; font-size: 22px; font-weight: 700;",
                            "Dashboard de Empleabilidad en Chile"
                        }
                        p {
                            style: "margin: 0; font-size: 13px; color: #757575;",
                            "Análisis del Mercado Laboral y Estadísticas de Empleo"
                        }
                    }
                }
                button {
                    style: "display: flex; align-items: center; gap: 6px; padding: 6px 14px; font-size: 13px; background: transparent; border: 1px solid #BDBDBD; border-radius: 6px; color: #424242; cursor: pointer;",
                    onclick: on_export,
                    "⬇ Exportar Datos"
                }
            }
        }
    }
}
