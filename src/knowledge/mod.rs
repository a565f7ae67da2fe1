//! Static knowledge records and the curated corpus the engine indexes.

mod builtin;
mod codes;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of knowledge categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DiagnosticPattern,
    ObdCode,
    MaintenanceGuide,
    ComponentInfo,
    Faq,
    VehicleComplaint,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::DiagnosticPattern,
        Category::ObdCode,
        Category::MaintenanceGuide,
        Category::ComponentInfo,
        Category::Faq,
        Category::VehicleComplaint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DiagnosticPattern => "diagnostic_pattern",
            Category::ObdCode => "obd_code",
            Category::MaintenanceGuide => "maintenance_guide",
            Category::ComponentInfo => "component_info",
            Category::Faq => "faq",
            Category::VehicleComplaint => "vehicle_complaint",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::DiagnosticPattern => "Diagnostic Pattern",
            Category::ObdCode => "OBD Code",
            Category::MaintenanceGuide => "Maintenance Guide",
            Category::ComponentInfo => "Component Info",
            Category::Faq => "FAQ",
            Category::VehicleComplaint => "Vehicle Complaint",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        })
    }
}

/// A curated article in the knowledge corpus. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub severity: Severity,
    pub related_components: Vec<String>,
}

impl KnowledgeEntry {
    /// Text that gets indexed: title, content and keywords.
    pub fn document_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + self.content.len() + 64);
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.content);
        for keyword in &self.keywords {
            text.push(' ');
            text.push_str(keyword);
        }
        text
    }
}

/// An OBD-II diagnostic trouble code, e.g. `P0420`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticCode {
    pub code: String,
    pub description: String,
    pub severity: Severity,
    pub subsystem: String,
    /// Most likely first.
    pub common_causes: Vec<String>,
    pub symptoms: Vec<String>,
    pub cost_range: Option<String>,
}

impl DiagnosticCode {
    /// Text that gets indexed: code, description, causes and symptoms.
    pub fn document_text(&self) -> String {
        let capacity = 2 + self.common_causes.len() + self.symptoms.len();
        let mut parts: Vec<&str> = Vec::with_capacity(capacity);
        parts.push(&self.code);
        parts.push(&self.description);
        parts.extend(self.common_causes.iter().map(String::as_str));
        parts.extend(self.symptoms.iter().map(String::as_str));
        parts.join(" ")
    }

    /// Present this code as an `obd_code` knowledge entry.
    pub fn to_entry(&self) -> KnowledgeEntry {
        let mut content = format!(
            "{}. Common causes: {}. Symptoms: {}.",
            self.description,
            self.common_causes.join(", "),
            self.symptoms.join(", ")
        );
        if let Some(cost) = &self.cost_range {
            content.push_str(" Typical repair cost: ");
            content.push_str(cost);
            content.push('.');
        }
        KnowledgeEntry {
            id: self.code.clone(),
            category: Category::ObdCode,
            title: format!("{} - {}", self.code, self.description),
            content,
            keywords: vec![self.code.clone()],
            severity: self.severity,
            related_components: vec![self.subsystem.clone()],
        }
    }
}

/// The read-only corpus: knowledge entries plus trouble codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub entries: Vec<KnowledgeEntry>,
    pub codes: Vec<DiagnosticCode>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>, codes: Vec<DiagnosticCode>) -> Self {
        Self { entries, codes }
    }

    /// The curated automotive corpus shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries(),
            codes: codes::codes(),
        }
    }

    /// Case-insensitive trouble code lookup.
    pub fn code(&self, code: &str) -> Option<&DiagnosticCode> {
        self.codes.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn entry(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
