// What the renderer needs: the formatted balance with a sign-based tone,
// and either the ordered advisories or an explicit instruction to clear them.
use serde::Serialize;
use shared::{Advisory, Snapshot};

use crate::data::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceTone {
    NonNegative,
    Negative,
}

impl BalanceTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            BalanceTone::NonNegative => "balance-positive",
            BalanceTone::Negative => "balance-negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceView {
    pub text: String,
    pub tone: BalanceTone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "advisories", rename_all = "snake_case")]
pub enum AdvisoryPanel {
    /// Remove whatever was shown before; do not render an empty container.
    Clear,
    Show(Vec<Advisory>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub balance: BalanceView,
    pub advisories: AdvisoryPanel,
}

pub fn balance_view(snapshot: &Snapshot) -> BalanceView {
    // Tone follows the displayed cents, so "R$ 0,00" is never shown as negative.
    let cents = (snapshot.remaining * 100.0).round() / 100.0;
    let tone = if cents < 0.0 {
        BalanceTone::Negative
    } else {
        BalanceTone::NonNegative
    };
    BalanceView {
        text: format_currency(cents),
        tone,
    }
}

pub fn present(snapshot: &Snapshot, advisories: Vec<Advisory>) -> Presentation {
    let advisories = if advisories.is_empty() {
        AdvisoryPanel::Clear
    } else {
        AdvisoryPanel::Show(advisories)
    };
    Presentation {
        balance: balance_view(snapshot),
        advisories,
    }
}
