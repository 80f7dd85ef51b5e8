//! HTML comparison page: one column per vision mode.
//!
//! Each column shows the scheme swatch and a demo line chart styled with the
//! scheme as that mode perceives it.

use std::fmt::Write;
use std::path::Path;

use cvd_core::{
    scheme_to_svg, Catalog, ColourError, ColourScheme, Deficiency, DocumentType, Severity,
    StyleConfig, StyleSession, DEFAULT_SCHEME,
};
use serde::Serialize;

use crate::chart::{escape_xml, line_chart_svg};
use crate::curves::{demo_curves, DEFAULT_CURVES, DEFAULT_SAMPLES};
use crate::VisionMode;

/// What to put on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub scheme: String,
    pub severity: Severity,
    pub deficiencies: Vec<Deficiency>,
    pub seed: u32,
    pub curves: usize,
    pub samples: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            severity: Severity::FULL,
            deficiencies: Deficiency::ALL.to_vec(),
            seed: 0,
            curves: DEFAULT_CURVES,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// One rendered column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub mode: String,
    pub colours: Vec<String>,
    pub swatch_svg: String,
    pub chart_svg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub scheme: String,
    pub severity: f64,
    pub panels: Vec<Panel>,
}

impl Dashboard {
    /// Renders the unshifted scheme followed by one panel per deficiency.
    ///
    /// Every panel is styled as a light report, shifted or not. Returns
    /// `ColourError::UnknownScheme` if the scheme is not in `catalog`.
    pub fn build(catalog: &Catalog, options: &DashboardOptions) -> Result<Self, ColourError> {
        let mut session = StyleSession::new(catalog.clone());
        let active = session.init(&options.scheme, DocumentType::Report, None)?;
        let base = active.scheme.clone();
        let curves = demo_curves(options.seed, options.curves, options.samples);

        let modes = std::iter::once(VisionMode::Normal)
            .chain(options.deficiencies.iter().copied().map(VisionMode::Dichromat));
        let panels = modes
            .map(|mode| {
                let scheme = mode.apply(&base, options.severity);
                let style = match mode {
                    VisionMode::Normal => active.config.clone(),
                    VisionMode::Dichromat(_) => {
                        StyleConfig::from_scheme(&scheme, DocumentType::Report, false)
                    }
                };
                Panel {
                    title: mode.to_string(),
                    mode: mode.name().to_string(),
                    colours: hex_colours(&scheme),
                    swatch_svg: scheme_to_svg(&scheme),
                    chart_svg: line_chart_svg(&style, &curves),
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(scheme = base.name(), panels = panels.len(), "built dashboard");
        Ok(Self {
            scheme: base.name().to_string(),
            severity: options.severity.value(),
            panels,
        })
    }

    /// A standalone HTML document laying the panels out side by side.
    pub fn to_html(&self) -> String {
        let title = format!(
            "{} at {:.0}% severity",
            escape_xml(&capitalise(&self.scheme)),
            self.severity * 100.0
        );
        let mut html = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html lang=\"en\">");
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "<meta charset=\"utf-8\">");
        let _ = writeln!(html, "<title>{title}</title>");
        let _ = writeln!(
            html,
            "<style>body{{font-family:serif;margin:16px}}.grid{{display:grid;grid-template-columns:repeat({},1fr);gap:16px}}.panel h2{{font-size:1.1em}}.panel svg{{max-width:100%;height:auto;display:block;margin-bottom:8px}}</style>",
            self.panels.len().max(1)
        );
        let _ = writeln!(html, "</head>");
        let _ = writeln!(html, "<body>");
        let _ = writeln!(html, "<h1>{title}</h1>");
        let _ = writeln!(html, "<div class=\"grid\">");
        for panel in &self.panels {
            let _ = writeln!(
                html,
                "<section class=\"panel\" data-mode=\"{}\">",
                escape_xml(&panel.mode)
            );
            let _ = writeln!(html, "<h2>{}</h2>", escape_xml(&panel.title));
            let _ = writeln!(html, "{}", panel.swatch_svg);
            let _ = writeln!(html, "{}", panel.chart_svg);
            let _ = writeln!(html, "</section>");
        }
        let _ = writeln!(html, "</div>");
        let _ = writeln!(html, "</body>");
        html.push_str("</html>\n");
        html
    }

    /// Writes [`to_html`](Self::to_html) to `path`.
    ///
    /// Returns `ColourError::Io` on write failure.
    pub fn write_html(&self, path: &Path) -> Result<(), ColourError> {
        std::fs::write(path, self.to_html()).map_err(|e| ColourError::Io(e.to_string()))?;
        tracing::info!(path = %path.display(), panels = self.panels.len(), "wrote dashboard");
        Ok(())
    }
}

fn hex_colours(scheme: &ColourScheme) -> Vec<String> {
    scheme.colours().iter().map(|c| c.to_hex()).collect()
}

fn capitalise(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
