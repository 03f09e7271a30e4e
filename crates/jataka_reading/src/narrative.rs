//! Narrative text tables and the four forecast sections.
//!
//! Section wording depends only on the active mahadasha and the birth
//! signs of a few grahas. Calendar references are expressed relative to
//! the year of the reading's reference instant.

use chrono::{Datelike, NaiveDate};
use jataka_vedic_base::{Graha, Rashi};

use crate::context::ReadingContext;

/// Width of the rule under section titles.
pub const SECTION_RULE_WIDTH: usize = 50;

/// Width of the rule under the recommendations title and footer.
pub const SUMMARY_RULE_WIDTH: usize = 60;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Health emphasis of each mahadasha lord.
pub const fn health_effect(lord: Graha) -> &'static str {
    match lord {
        Graha::Surya => "Strong vitality, watch heart and eyes",
        Graha::Chandra => "Emotional sensitivity, focus on mental health",
        Graha::Mangal => "High energy, prevent accidents and inflammation",
        Graha::Buddh => "Good nervous system, watch stress levels",
        Graha::Guru => "Generally positive, watch weight gain",
        Graha::Shukra => "Good overall health, minor reproductive system attention",
        Graha::Shani => "Build discipline, watch bones and chronic conditions",
        Graha::Rahu => "Unusual health patterns, avoid extremes",
        Graha::Ketu => "Spiritual healing beneficial, watch mysterious ailments",
    }
}

/// Career sectors aligned with each mahadasha lord.
pub const fn career_sectors(lord: Graha) -> &'static str {
    match lord {
        Graha::Surya => "Government, Leadership, Administration, Politics",
        Graha::Chandra => "Healthcare, Food, Hospitality, Public Service",
        Graha::Mangal => "Engineering, Military, Sports, Real Estate",
        Graha::Buddh => "IT, Communication, Writing, Trade, Education",
        Graha::Guru => "Finance, Teaching, Law, Consulting, Spiritual",
        Graha::Shukra => "Arts, Entertainment, Beauty, Luxury, Fashion",
        Graha::Shani => "Manufacturing, Construction, Mining, Agriculture",
        Graha::Rahu => "Technology, Innovation, Foreign Trade, Research",
        Graha::Ketu => "Spirituality, Research, Healing, Technical Skills",
    }
}

/// Year and month the forecasts count from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastCalendar {
    year: i32,
    month0: u32,
}

impl ForecastCalendar {
    pub fn starting(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Reference year plus `offset`.
    pub fn year(&self, offset: i32) -> i32 {
        self.year + offset
    }

    /// "Aug 2025 - Jan 2026": the reference month through five months on.
    pub fn six_month_window(&self) -> String {
        let end = self.month0 + 5;
        format!(
            "{} {} - {} {}",
            MONTH_ABBREV[self.month0 as usize],
            self.year,
            MONTH_ABBREV[(end % 12) as usize],
            self.year + (end / 12) as i32
        )
    }

    /// "2025-2027": the reference year through two years on.
    pub fn two_year_span(&self) -> String {
        format!("{}-{}", self.year, self.year + 2)
    }
}

/// Line-oriented text builder for one section.
#[derive(Debug, Default)]
pub(crate) struct Section {
    lines: Vec<String>,
}

impl Section {
    pub(crate) fn titled(title: &str, rule_width: usize) -> Self {
        Self {
            lines: vec![title.to_string(), "=".repeat(rule_width)],
        }
    }

    pub(crate) fn heading(&mut self, heading: impl AsRef<str>) -> &mut Self {
        self.lines.push(String::new());
        self.lines.push(heading.as_ref().to_string());
        self
    }

    pub(crate) fn bullet(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.lines.push(format!("• {}", text.as_ref()));
        self
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.lines.push(text.as_ref().to_string());
        self
    }

    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn sign_in(sign: Option<Rashi>, set: &[Rashi]) -> bool {
    sign.is_some_and(|s| set.contains(&s))
}

pub fn health_section(ctx: &ReadingContext, cal: &ForecastCalendar) -> String {
    let dasha = ctx.mahadasha();
    let mut s = Section::titled("HEALTH FORECAST", SECTION_RULE_WIDTH);

    s.heading(format!("NEXT 6 MONTHS ({}):", cal.six_month_window()));
    match dasha {
        Graha::Surya | Graha::Mangal => {
            s.bullet("Generally strong vitality and energy levels")
                .bullet("Watch for minor inflammation or heat-related issues")
                .bullet("Best months: September-October for physical activities");
        }
        Graha::Chandra | Graha::Shukra => {
            s.bullet("Focus on emotional well-being and stress management")
                .bullet("Possible minor digestive or hormonal fluctuations")
                .bullet("Best months: November-December for healing and recovery");
        }
        _ => {
            s.bullet("Moderate health trends with steady energy")
                .bullet("Pay attention to routine and preventive care");
        }
    }

    s.heading(format!("NEXT 2 YEARS ({}):", cal.two_year_span()));
    s.bullet("Major Transit Influence: Jupiter and Saturn movements affecting long-term health");
    if sign_in(
        ctx.rashi_of(Graha::Mangal),
        &[Rashi::Mesha, Rashi::Vrischika, Rashi::Simha],
    ) {
        s.bullet("Strong constitution with good recovery ability").bullet(format!(
            "Watch periods: March-April {} (minor health attention needed)",
            cal.year(1)
        ));
    } else {
        s.bullet("Steady health with focus on building immunity").bullet(format!(
            "Favorable period: Oct {} - Feb {} for health improvements",
            cal.year(1),
            cal.year(2)
        ));
    }

    s.heading("PHYSICAL & EMOTIONAL WELL-BEING:");
    s.bullet(format!(
        "Current Dasha ({}) suggests: {}",
        dasha.english_name(),
        health_effect(dasha)
    ));
    s.finish()
}

pub fn career_section(ctx: &ReadingContext, cal: &ForecastCalendar) -> String {
    let dasha = ctx.mahadasha();
    let (y0, y1) = (cal.year(0), cal.year(1));
    let mut s = Section::titled("CAREER & JOB PROSPECTS", SECTION_RULE_WIDTH);

    s.heading("JOB STABILITY & CHANGES (Next 12-24 Months):");
    match dasha {
        Graha::Shani | Graha::Guru => {
            s.bullet("HIGH STABILITY: Current period favors steady career growth")
                .bullet(format!("Promotion chances: 70% likely between Jan-Jun {y1}"))
                .bullet("Role changes: Natural progression rather than sudden shifts");
        }
        Graha::Surya | Graha::Mangal => {
            s.bullet("DYNAMIC PERIOD: Leadership opportunities emerging")
                .bullet(format!(
                    "Job changes: 60% chance of positive role transition by mid-{y1}"
                ))
                .bullet(format!(
                    "Entrepreneurial ventures: Favorable period starting Oct {y0}"
                ));
        }
        _ => {
            s.bullet("MODERATE STABILITY: Gradual improvements expected")
                .bullet("Focus on skill development and networking");
        }
    }

    s.heading("FAVORABLE PERIODS:");
    s.bullet(format!("Job Search: Sep-Nov {y0}, Mar-May {y1}"))
        .bullet(format!("Business Ventures: Oct {y0}-Jan {y1}, Jul-Sep {y1}"))
        .bullet(format!("Relocation: Jupiter transit supports moves in Q2 {y1}"))
        .bullet(format!("Salary Negotiations: Dec {y0}, Jun {y1}"));

    s.heading("ALIGNED SECTORS & ROLES:");
    s.bullet(format!("Primary alignment: {}", career_sectors(dasha)));
    if sign_in(ctx.rashi_of(Graha::Shani), &[Rashi::Makara, Rashi::Kumbha]) {
        s.bullet("Secondary strength: Management, systematic work, long-term projects");
    }
    if sign_in(ctx.rashi_of(Graha::Guru), &[Rashi::Dhanu, Rashi::Meena]) {
        s.bullet("Growth potential: Advisory roles, international work, education sector");
    }
    s.finish()
}

pub fn family_section(ctx: &ReadingContext, cal: &ForecastCalendar) -> String {
    let dasha = ctx.mahadasha();
    let (y0, y1) = (cal.year(0), cal.year(1));
    let mut s = Section::titled("FAMILY & RELATIONSHIPS", SECTION_RULE_WIDTH);

    s.heading("FAMILY ENVIRONMENT:");
    match dasha {
        Graha::Chandra | Graha::Shukra | Graha::Guru => {
            s.bullet("HARMONIOUS PERIOD: Family relationships strengthening")
                .bullet("Emotional bonds deepening, good communication")
                .bullet("Possible family celebrations or gatherings");
        }
        Graha::Mangal | Graha::Shani => {
            s.bullet("STRUCTURED PHASE: Some tension but ultimately strengthening")
                .bullet("Need for patience in family matters")
                .bullet("Resolution of old family issues possible");
        }
        _ => {
            s.bullet("BALANCED DYNAMICS: Normal family interactions")
                .bullet("Focus on practical family matters");
        }
    }

    s.heading("MARRIAGE & RELATIONSHIPS:");
    if sign_in(
        ctx.rashi_of(Graha::Shukra),
        &[Rashi::Vrishabha, Rashi::Tula, Rashi::Meena],
    ) {
        s.bullet("Strong relationship potential in current period")
            .bullet(format!(
                "For singles: Meeting prospects likely in Q4 {y0} or Q2 {y1}"
            ))
            .bullet("For married: Renewed romance and understanding");
    }
    s.bullet("Key relationship periods:")
        .line(format!("  - October-December {y0}: New connections or deepening bonds"))
        .line(format!("  - April-June {y1}: Important relationship decisions"))
        .line(format!("  - September-November {y1}: Harmony and celebration"));

    s.heading("CHILDREN & HOUSEHOLD RESPONSIBILITIES:");
    match dasha {
        Graha::Guru => {
            s.bullet("EXCELLENT for family expansion or child-related matters")
                .bullet("Educational decisions for children go well")
                .bullet("Financial planning for family needs favorable");
        }
        Graha::Chandra => {
            s.bullet("Emotional connection with children strengthens")
                .bullet("Home improvements or relocations possible")
                .bullet("Motherly/nurturing role emphasized");
        }
        _ => {}
    }

    s.heading("QUARTERLY HIGHLIGHTS:");
    s.bullet(format!("Q3 {y0}: Family harmony, possible reunions"))
        .bullet(format!("Q4 {y0}: Important family decisions, celebrations"))
        .bullet(format!("Q1 {y1}: New family responsibilities or changes"))
        .bullet(format!("Q2 {y1}: Relationship milestones, emotional fulfillment"));

    s.heading("PARENTS & EXTENDED FAMILY:");
    s.bullet("Generally supportive period with elder family members")
        .bullet(format!("Possible health attention needed for elders in Q1 {y1}"))
        .bullet("Family property or inheritance matters may surface");
    s.finish()
}

pub fn recommendations_section(ctx: &ReadingContext, cal: &ForecastCalendar) -> String {
    let (y0, y1, y2) = (cal.year(0), cal.year(1), cal.year(2));
    let mut s = Section::titled(
        &format!("KEY RECOMMENDATIONS & PRECAUTIONS ({})", cal.two_year_span()),
        SUMMARY_RULE_WIDTH,
    );

    s.heading("PRIORITY ACTIONS:");
    match ctx.mahadasha() {
        Graha::Guru | Graha::Shukra => {
            s.bullet("Focus on growth, learning, and positive relationships")
                .bullet("Excellent time for major life decisions")
                .bullet("Invest in health and spiritual practices");
        }
        Graha::Shani | Graha::Mangal => {
            s.bullet("Practice patience and disciplined approach")
                .bullet("Build strong foundations in career and health")
                .bullet("Avoid impulsive decisions, plan carefully");
        }
        _ => {
            s.bullet("Maintain balance in all life areas")
                .bullet("Focus on communication and adaptability")
                .bullet("Regular health check-ups recommended");
        }
    }

    s.heading("PERIODS TO WATCH:");
    s.bullet(format!("March-April {y1}: Extra care in health and relationships"))
        .bullet(format!("August-September {y1}: Career decisions need careful thought"))
        .bullet(format!("December {y1}: Family matters require attention"));

    s.heading("MOST FAVORABLE PERIODS:");
    s.bullet(format!("October-December {y0}: Overall positive phase"))
        .bullet(format!("May-July {y1}: Career and financial growth"))
        .bullet(format!("January-March {y2}: Personal and spiritual development"));
    s.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_vedic_base::ALL_GRAHAS;

    #[test]
    fn every_lord_has_text() {
        for g in ALL_GRAHAS {
            assert!(!health_effect(g).is_empty());
            assert!(!career_sectors(g).is_empty());
        }
    }

    #[test]
    fn window_within_year() {
        let cal = ForecastCalendar::starting(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(cal.six_month_window(), "Mar 2025 - Aug 2025");
    }

    #[test]
    fn window_crosses_year() {
        let cal = ForecastCalendar::starting(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
        assert_eq!(cal.six_month_window(), "Aug 2025 - Jan 2026");
        assert_eq!(cal.two_year_span(), "2025-2027");
    }

    #[test]
    fn december_window() {
        let cal = ForecastCalendar::starting(NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
        assert_eq!(cal.six_month_window(), "Dec 2030 - May 2031");
    }

    #[test]
    fn section_layout() {
        let mut s = Section::titled("TITLE", 5);
        s.heading("HEAD:").bullet("one");
        assert_eq!(s.finish(), "TITLE\n=====\n\nHEAD:\n• one");
    }
}
