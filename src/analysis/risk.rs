//! Per-family risk decision tables and explanation templates
//!
//! Each clause family gets its own assessor: a small decision table over
//! substrings and numeric captures in the lowercased scan text. The scan text
//! is chosen by the caller per [`RiskScope`] — the whole document or the
//! clause excerpt.
//!
//! [`RiskScope`]: super::RiskScope

use crate::model::RiskLevel;
use regex::Regex;

/// Which decision table assesses a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RiskFamily {
    Payment,
    Deposit,
    Termination,
    Maintenance,
    Liability,
    Confidentiality,
    NonCompete,
    IntellectualProperty,
    ForceMajeure,
    GoverningLaw,
    /// Catch-all for numbered sections with no dedicated table
    Section,
}

/// Substrings that push a catch-all section clause to danger
const SECTION_DANGER: &[&str] = &["penalty", "fine", "unlimited", "all damages", "waiver"];

/// Substrings that push a catch-all section clause to warning
const SECTION_WARNING: &[&str] = &["modify", "change", "discretion", "sole discretion"];

/// Compiled numeric captures shared by the assessors
pub(crate) struct RiskRules {
    /// Deposit size in months/multiples of rent; tolerates "four (4) months"
    deposit_amount: Regex,
    /// Generic duration, normalized to months by the caller
    duration: Regex,
}

impl RiskRules {
    pub fn new() -> Self {
        Self {
            deposit_amount: Regex::new(r"(\d+)\s*\)?\s*(?:months?|times?)\s*(?:rent|payment)")
                .unwrap(),
            duration: Regex::new(r"(\d+)\s*(years?|months?)").unwrap(),
        }
    }

    /// Run the family's decision table over the scan text
    pub fn assess(&self, family: RiskFamily, scan: &str) -> RiskLevel {
        let lower = scan.to_lowercase();
        match family {
            RiskFamily::Payment => assess_payment(&lower),
            RiskFamily::Deposit => match self.deposit_months(&lower) {
                Some(amount) if amount > 3 => RiskLevel::Danger,
                Some(amount) if amount > 2 => RiskLevel::Warning,
                _ => RiskLevel::Safe,
            },
            RiskFamily::Termination => assess_termination(&lower),
            RiskFamily::Maintenance => assess_maintenance(&lower),
            RiskFamily::Liability => assess_liability(&lower),
            RiskFamily::Confidentiality => assess_confidentiality(&lower),
            RiskFamily::NonCompete => self.assess_non_compete(&lower),
            RiskFamily::IntellectualProperty => assess_ip(&lower),
            RiskFamily::ForceMajeure => {
                if lower.contains("force majeure") {
                    RiskLevel::Safe
                } else {
                    RiskLevel::Warning
                }
            }
            RiskFamily::GoverningLaw => {
                if lower.contains("governing law") || lower.contains("jurisdiction") {
                    RiskLevel::Safe
                } else {
                    RiskLevel::Warning
                }
            }
            RiskFamily::Section => assess_section(&lower),
        }
    }

    /// Produce the family's natural-language explanation
    ///
    /// `title` is only read by the catch-all section template.
    pub fn explain(&self, family: RiskFamily, scan: &str, title: &str) -> String {
        let lower = scan.to_lowercase();
        match family {
            RiskFamily::Payment => {
                if lower.contains("penalty") {
                    "This clause includes late payment penalties. Review the penalty structure to ensure it's reasonable and legally enforceable.".to_string()
                } else {
                    "Standard payment terms with clear due dates and amounts. This appears to be a fair arrangement.".to_string()
                }
            }
            RiskFamily::Deposit => match self.deposit_months(&lower) {
                Some(amount) if amount > 2 => format!(
                    "Security deposit of {} months exceeds the legal limit of 2 months in most jurisdictions. This clause may be unenforceable.",
                    amount
                ),
                _ => "Security deposit amount appears reasonable and within legal limits."
                    .to_string(),
            },
            RiskFamily::Termination => {
                if lower.contains("penalty") {
                    "Early termination penalty clause detected. Consider negotiating the penalty amount to ensure it's reasonable.".to_string()
                } else {
                    "Standard termination notice period provides reasonable time for both parties to prepare.".to_string()
                }
            }
            RiskFamily::Maintenance => {
                if lower.contains("tenant") && lower.contains("structural") {
                    "Requiring tenant to pay for structural repairs is unusual and potentially unfair. Structural issues are typically landlord responsibilities.".to_string()
                } else {
                    "Maintenance responsibilities are clearly defined between parties.".to_string()
                }
            }
            RiskFamily::Liability => {
                if lower.contains("unlimited") {
                    "Unlimited liability clauses are extremely risky and may be unenforceable. Consider negotiating liability caps.".to_string()
                } else {
                    "Liability terms appear reasonable with appropriate limitations.".to_string()
                }
            }
            RiskFamily::Confidentiality => {
                if lower.contains("unlimited") {
                    "Unlimited confidentiality obligations may be overly broad and difficult to enforce. Consider defining specific time limits and scope.".to_string()
                } else if lower.contains("perpetual") {
                    "Perpetual confidentiality obligations are unusual and may be unreasonable. Standard practice is 2-5 years after contract termination.".to_string()
                } else {
                    "Confidentiality clause appears reasonable with appropriate limitations and scope.".to_string()
                }
            }
            RiskFamily::NonCompete => match self.duration_months(&lower) {
                Some((raw, unit, months)) if months > 24 => format!(
                    "Non-compete duration of {} {} exceeds typical limits. Most jurisdictions limit non-compete clauses to 1-2 years maximum.",
                    raw, unit
                ),
                Some((raw, unit, months)) if months > 12 => format!(
                    "Non-compete duration of {} {} is on the longer side. Ensure this is reasonable for your industry and role.",
                    raw, unit
                ),
                _ => "Non-compete clause appears reasonable in scope and duration.".to_string(),
            },
            RiskFamily::IntellectualProperty => {
                if lower.contains("all rights") && lower.contains("employer") {
                    "Broad intellectual property assignment to employer may be overly restrictive. Consider negotiating exceptions for personal projects or pre-existing work.".to_string()
                } else if lower.contains("pre-existing") && lower.contains("assign") {
                    "Assignment of pre-existing intellectual property is unusual and potentially problematic. Ensure you retain rights to work created before employment.".to_string()
                } else {
                    "Intellectual property clause appears balanced and fair.".to_string()
                }
            }
            RiskFamily::ForceMajeure => {
                if !lower.contains("force majeure") {
                    "Missing force majeure clause. Consider adding protection for unforeseen circumstances that prevent contract performance.".to_string()
                } else {
                    "Force majeure clause provides appropriate protection for unforeseen circumstances.".to_string()
                }
            }
            RiskFamily::GoverningLaw => {
                if !lower.contains("governing law") && !lower.contains("jurisdiction") {
                    "Missing governing law clause. This could lead to uncertainty about which laws apply to disputes.".to_string()
                } else {
                    "Governing law clause clearly specifies applicable jurisdiction and legal framework.".to_string()
                }
            }
            RiskFamily::Section => {
                if lower.contains("penalty") {
                    format!("This {} clause includes penalties. Review the penalty structure to ensure it's reasonable and legally enforceable.", title)
                } else if lower.contains("unlimited") {
                    format!("This {} clause contains unlimited liability or obligations, which may be unenforceable or unreasonable.", title)
                } else if lower.contains("discretion") {
                    format!("This {} clause grants broad discretion to one party. Consider negotiating more specific terms and limitations.", title)
                } else {
                    format!("This {} clause appears to be standard and reasonable. Review the specific terms to ensure they meet your needs.", title)
                }
            }
        }
    }

    /// First deposit-size capture, in months/multiples of rent
    fn deposit_months(&self, lower: &str) -> Option<u64> {
        self.deposit_amount
            .captures(lower)
            .and_then(|caps| caps[1].parse().ok())
    }

    /// First duration capture: (raw amount, unit as written, normalized months)
    fn duration_months(&self, lower: &str) -> Option<(u64, String, u64)> {
        let caps = self.duration.captures(lower)?;
        let raw: u64 = caps[1].parse().ok()?;
        let unit = caps[2].to_string();
        let months = if unit.starts_with("year") {
            raw.saturating_mul(12)
        } else {
            raw
        };
        Some((raw, unit, months))
    }

    fn assess_non_compete(&self, lower: &str) -> RiskLevel {
        if let Some((_, _, months)) = self.duration_months(lower) {
            if months > 24 {
                return RiskLevel::Danger;
            }
            if months > 12 {
                return RiskLevel::Warning;
            }
        }
        if lower.contains("unlimited") || lower.contains("worldwide") {
            return RiskLevel::Danger;
        }
        RiskLevel::Safe
    }
}

fn assess_payment(lower: &str) -> RiskLevel {
    if lower.contains("penalty") && lower.contains("late") {
        return RiskLevel::Warning;
    }
    if lower.contains("interest") && lower.contains("compound") {
        return RiskLevel::Danger;
    }
    RiskLevel::Safe
}

fn assess_termination(lower: &str) -> RiskLevel {
    if lower.contains("penalty") && lower.contains("termination") {
        return RiskLevel::Warning;
    }
    if lower.contains("no termination") || lower.contains("fixed term") {
        return RiskLevel::Danger;
    }
    RiskLevel::Safe
}

fn assess_maintenance(lower: &str) -> RiskLevel {
    if lower.contains("tenant") && lower.contains("structural") {
        return RiskLevel::Danger;
    }
    if lower.contains("tenant") && lower.contains("major") {
        return RiskLevel::Warning;
    }
    RiskLevel::Safe
}

fn assess_liability(lower: &str) -> RiskLevel {
    if lower.contains("unlimited") || lower.contains("all damages") {
        return RiskLevel::Danger;
    }
    if lower.contains("punitive") || lower.contains("consequential") {
        return RiskLevel::Warning;
    }
    RiskLevel::Safe
}

fn assess_confidentiality(lower: &str) -> RiskLevel {
    if lower.contains("unlimited") && lower.contains("confidential") {
        return RiskLevel::Danger;
    }
    if lower.contains("perpetual") || lower.contains("forever") {
        return RiskLevel::Warning;
    }
    RiskLevel::Safe
}

fn assess_ip(lower: &str) -> RiskLevel {
    if lower.contains("all rights") && lower.contains("employer") {
        return RiskLevel::Warning;
    }
    if lower.contains("pre-existing") && lower.contains("assign") {
        return RiskLevel::Danger;
    }
    RiskLevel::Safe
}

fn assess_section(lower: &str) -> RiskLevel {
    if SECTION_DANGER.iter().any(|kw| lower.contains(kw)) {
        return RiskLevel::Danger;
    }
    if SECTION_WARNING.iter().any(|kw| lower.contains(kw)) {
        return RiskLevel::Warning;
    }
    RiskLevel::Safe
}
