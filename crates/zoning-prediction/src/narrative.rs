//! Plain-language findings and caveats attached to a scenario result.

use zoning_core::{GrowthAssumption, Place, ReformType};

/// Growth above this 5-year rate counts as strong.
const STRONG_GROWTH_PCT: f64 = 5.0;

/// Below this many comparables the evidence is thin.
const LIMITED_COMPARABLES: usize = 3;

/// Horizons beyond this are long-range.
const LONG_HORIZON_YEARS: u32 = 5;

/// What the findings are written about.
pub struct NarrativeContext<'a> {
    pub place: &'a Place,
    pub reform_types: &'a [ReformType],
    pub realistic_pct: f64,
    pub n_comparables: usize,
    pub horizon_years: u32,
    pub growth_assumption: GrowthAssumption,
}

pub fn key_findings(ctx: &NarrativeContext<'_>) -> Vec<String> {
    let mut findings = vec![format!(
        "Based on {} comparable cities, we predict a {:.1}% change in annual permits within {} years.",
        ctx.n_comparables, ctx.realistic_pct, ctx.horizon_years
    )];

    let additional = (ctx.place.permits_f64() * ctx.realistic_pct / 100.0).round() as i64;
    let direction = if additional < 0 { "fewer" } else { "additional" };
    findings.push(format!(
        "This translates to approximately {} {direction} housing permits per year.",
        with_thousands(additional.unsigned_abs())
    ));

    if ctx.reform_types.contains(&ReformType::AduLotSplit) {
        findings.push(
            "ADU reforms typically show fastest adoption in the first 2-3 years as homeowners \
             learn about the option."
                .to_string(),
        );
    }
    if ctx.reform_types.iter().any(ReformType::is_comprehensive) {
        findings.push(
            "Comprehensive zoning changes often take 3-5 years to show full effect as developers \
             adjust pipelines."
                .to_string(),
        );
    }

    let growth = ctx.place.growth_rate_5yr;
    if growth > STRONG_GROWTH_PCT {
        findings.push(format!(
            "{}'s strong recent growth ({growth:.1}% 5-year) suggests above-average response to reform.",
            ctx.place.place_name
        ));
    } else if growth < 0.0 {
        findings.push(format!(
            "{}'s recent decline ({growth:.1}% 5-year) may moderate reform impact.",
            ctx.place.place_name
        ));
    }

    if ctx.growth_assumption != GrowthAssumption::Baseline {
        findings.push(format!(
            "Projections are reported under a {} growth assumption; the estimates themselves \
             reflect current local conditions.",
            ctx.growth_assumption
        ));
    }

    findings
}

pub fn caveats(n_comparables: usize, horizon_years: u32, n_reforms: usize) -> Vec<String> {
    let mut caveats = vec![
        format!(
            "These predictions are based on {n_comparables} similar cities that adopted comparable \
             reforms. Actual outcomes may vary."
        ),
        "Implementation quality significantly affects outcomes. Strong political support and \
         clear regulations improve results."
            .to_string(),
        "Economic conditions (interest rates, construction costs, labor availability) will \
         influence actual permit volumes."
            .to_string(),
    ];

    if n_comparables < LIMITED_COMPARABLES {
        caveats.push(
            "Limited comparison data available. Predictions have higher uncertainty.".to_string(),
        );
    }
    if horizon_years > LONG_HORIZON_YEARS {
        caveats.push(format!(
            "Long-term predictions ({horizon_years}+ years) have significant uncertainty due to \
             economic cycles and policy changes."
        ));
    }
    if n_reforms > 1 {
        caveats.push(
            "Effects of multiple reforms are added together; interactions between reforms are \
             not modeled."
                .to_string(),
        );
    }
    if n_reforms > 2 {
        caveats.push(
            "Multiple simultaneous reforms may have synergistic effects not fully captured in \
             historical data."
                .to_string(),
        );
    }

    caveats.push(
        "See the methodology notes for details on how predictions are calculated.".to_string(),
    );
    caveats
}

/// `1234567` -> `"1,234,567"`.
fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(growth: f64) -> Place {
        Place {
            place_id: "4805000".to_string(),
            place_name: "Austin".to_string(),
            state_id: "48".to_string(),
            state_name: "Texas".to_string(),
            recent_permits: 16500,
            growth_rate_5yr: growth,
            mf_share: 55.0,
        }
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(1234567), "1,234,567");
    }

    #[test]
    fn findings_cover_reform_and_growth_notes() {
        let place = place(9.1);
        let types = [ReformType::AduLotSplit, ReformType::ZoningUpzones];
        let findings = key_findings(&NarrativeContext {
            place: &place,
            reform_types: &types,
            realistic_pct: 20.0,
            n_comparables: 4,
            horizon_years: 5,
            growth_assumption: GrowthAssumption::Baseline,
        });
        assert!(findings[0].starts_with("Based on 4 comparable cities"));
        assert_eq!(
            findings[1],
            "This translates to approximately 3,300 additional housing permits per year."
        );
        assert!(findings.iter().any(|f| f.starts_with("ADU reforms")));
        assert!(findings.iter().any(|f| f.starts_with("Comprehensive zoning")));
        assert!(findings.iter().any(|f| f.contains("strong recent growth (9.1% 5-year)")));
        assert_eq!(findings.len(), 5);
    }

    #[test]
    fn negative_change_reads_as_fewer_permits() {
        let place = place(-3.0);
        let findings = key_findings(&NarrativeContext {
            place: &place,
            reform_types: &[ReformType::AffordabilityRequirements],
            realistic_pct: -10.0,
            n_comparables: 0,
            horizon_years: 2,
            growth_assumption: GrowthAssumption::Pessimistic,
        });
        assert!(findings[1].contains("1,650 fewer"));
        assert!(findings.iter().any(|f| f.contains("recent decline")));
        assert!(findings.iter().any(|f| f.contains("pessimistic growth assumption")));
    }

    #[test]
    fn caveats_grow_with_uncertainty() {
        assert_eq!(caveats(5, 3, 1).len(), 4);
        let all = caveats(1, 8, 3);
        assert_eq!(all.len(), 8);
        assert!(all.iter().any(|c| c.contains("8+ years")));
        assert!(all.last().is_some_and(|c| c.contains("methodology")));
    }
}
