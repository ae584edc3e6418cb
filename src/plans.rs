//! Subscription plan catalog
//!
//! Static display data for the pricing sections; payment processing is
//! handled elsewhere.

use crate::model::PlanTier;

/// A displayable subscription plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub tier: PlanTier,
    pub name: &'static str,
    /// Monthly price in BRL.
    pub price: f64,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub static PLANS: &[Plan] = &[
    Plan {
        tier: PlanTier::Base,
        name: "Base",
        price: 97.0,
        description: "Ideal para começar sua jornada",
        features: &["Acesso básico", "IA limitada", "Suporte email"],
        popular: false,
    },
    Plan {
        tier: PlanTier::Escalada,
        name: "Escalada",
        price: 83.0,
        description: "Para quem quer resultados mais rápidos",
        features: &["Acesso completo", "IA avançada", "Suporte prioritário"],
        popular: true,
    },
    Plan {
        tier: PlanTier::Auge,
        name: "Auge",
        price: 59.90,
        description: "Experiência premium completa",
        features: &["Tudo incluso", "Consultoria 1:1", "Suporte 24/7"],
        popular: false,
    },
];

/// Look up the catalog entry for a tier.
pub fn plan_for(tier: PlanTier) -> &'static Plan {
    match tier {
        PlanTier::Base => &PLANS[0],
        PlanTier::Escalada => &PLANS[1],
        PlanTier::Auge => &PLANS[2],
    }
}

/// Format an amount as pt-BR currency: `97.0` -> `"R$ 97,00"`.
/// Non-finite or negative input degrades to zero, like the XP formatter.
pub fn format_currency(amount: f64) -> String {
    let safe = if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    };
    let cents = (safe * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    // Thousands separated by '.', decimals by ','.
    let mut int_part = String::new();
    for (i, c) in whole.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            int_part.push('.');
        }
        int_part.push(c);
    }
    let int_part: String = int_part.chars().rev().collect();

    format!("R$ {int_part},{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_tier() {
        assert_eq!(PLANS.len(), 3);
        assert_eq!(plan_for(PlanTier::Base).price, 97.0);
        assert_eq!(plan_for(PlanTier::Auge).price, 59.90);
        assert!(plan_for(PlanTier::Escalada).popular);
    }

    #[test]
    fn formats_pt_br_currency() {
        assert_eq!(format_currency(97.0), "R$ 97,00");
        assert_eq!(format_currency(59.90), "R$ 59,90");
        assert_eq!(format_currency(1250.5), "R$ 1.250,50");
        assert_eq!(format_currency(f64::NAN), "R$ 0,00");
        assert_eq!(format_currency(-3.0), "R$ 0,00");
    }
}
