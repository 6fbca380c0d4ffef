//! Marketing copy, embedded at build time from `content/site.json`.

use serde::Deserialize;

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub nav: Vec<String>,
    pub hero: Hero,
    pub ticker: Vec<String>,
    pub stats: Vec<Stat>,
    pub sections: Sections,
    pub process: Vec<ProcessStep>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub pricing: Vec<PricingTier>,
    pub faqs: Vec<Faq>,
    pub cta: ClosingCta,
    pub footer: Footer,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    pub badge: String,
    pub eyebrow: String,
    pub title_lead: String,
    pub title_accent: String,
    pub title_tail: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

fn default_suffix() -> String {
    "+".to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub target: u32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "default_suffix")]
    pub suffix: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SectionHeading {
    pub number: String,
    pub label: String,
    pub lead: String,
    pub accent: String,
    pub tail: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Sections {
    pub process: SectionHeading,
    pub services: SectionHeading,
    pub results: SectionHeading,
    pub pricing: SectionHeading,
    pub faq: SectionHeading,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub tag: String,
    pub quote: String,
    pub name: String,
    pub company: String,
    pub initials: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub cadence: String,
    pub blurb: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ClosingCta {
    pub lead: String,
    pub accent: String,
    pub tail: String,
    pub body: String,
    pub button: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Footer {
    pub blurb: String,
    pub services: Vec<String>,
    pub tagline: String,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        if content.nav.is_empty() {
            return Err(ContentError::Missing("nav"));
        }
        if content.stats.is_empty() {
            return Err(ContentError::Missing("stats"));
        }
        if content.faqs.is_empty() {
            return Err(ContentError::Missing("faqs"));
        }
        Ok(content)
    }

    /// Splits testimonials into the two marquee rows; the second row gets the
    /// extra card when the count is odd.
    pub fn testimonial_rows(&self) -> (Vec<Testimonial>, Vec<Testimonial>) {
        let mid = self.testimonials.len() / 2;
        let (first, second) = self.testimonials.split_at(mid);
        (first.to_vec(), second.to_vec())
    }
}

pub fn load() -> Result<SiteContent, ContentError> {
    SiteContent::parse(SITE_JSON)
}

/// `"FAQ"` -> `"#faq"`.
pub fn anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = load().expect("site.json should parse");
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.process.len(), 4);
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.testimonials.len(), 6);
        assert_eq!(content.faqs.len(), 5);
        assert_eq!(content.faqs[0].question, "What does Nexol Media do?");
    }

    #[test]
    fn stat_affixes_come_through() {
        let content = load().unwrap();
        let revenue = &content.stats[1];
        assert_eq!((revenue.prefix.as_str(), revenue.target, revenue.suffix.as_str()), ("$", 110, "K+"));
        assert_eq!(content.stats[0].prefix, "");
    }

    #[test]
    fn suffix_defaults_to_plus() {
        let stat: Stat = serde_json::from_str(r#"{"target": 5, "label": "x"}"#).unwrap();
        assert_eq!(stat.suffix, "+");
        assert_eq!(stat.prefix, "");
    }

    #[test]
    fn testimonials_are_well_formed() {
        let content = load().unwrap();
        for t in &content.testimonials {
            assert!(!t.quote.is_empty());
            assert!((1..=3).contains(&t.initials.chars().count()), "{}", t.name);
        }
        let (first, second) = content.testimonial_rows();
        assert_eq!(first.len() + second.len(), content.testimonials.len());
        assert!(!first.is_empty() && !second.is_empty());
    }

    #[test]
    fn exactly_one_featured_tier() {
        let content = load().unwrap();
        assert_eq!(content.pricing.iter().filter(|t| t.featured).count(), 1);
        assert!(content.pricing.iter().all(|t| !t.features.is_empty()));
    }

    #[test]
    fn every_nav_entry_has_a_section() {
        let content = load().unwrap();
        let anchors: Vec<_> = content.nav.iter().map(|l| anchor(l)).collect();
        assert_eq!(anchors, ["#process", "#services", "#results", "#pricing", "#faq"]);
    }

    #[test]
    fn rejects_empty_faqs() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value["faqs"] = serde_json::json!([]);
        let err = SiteContent::parse(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Missing("faqs")));
    }

    #[test]
    fn rejects_broken_json() {
        assert!(matches!(
            SiteContent::parse("{\"nav\": ["),
            Err(ContentError::Malformed(_))
        ));
    }
}
