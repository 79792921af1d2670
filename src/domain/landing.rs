//! Landing page content — copy, calls to action and entrance timing as data.

use crate::network::NETWORK_NAME;
use serde::Serialize;

/// Route of the market list.
pub const MARKETS_ROUTE: &str = "/markets";
/// Route of the test-token faucet.
pub const FAUCET_ROUTE: &str = "/faucet";

/// Staggered entrance of a group of items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaggerConfig {
    pub stagger_children_s: f64,
    pub delay_children_s: f64,
    pub item_duration_s: f64,
    /// Items slide up from this vertical offset.
    pub item_offset_y_px: f64,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            stagger_children_s: 0.3,
            delay_children_s: 0.2,
            item_duration_s: 0.8,
            item_offset_y_px: 20.0,
        }
    }
}

/// Entrance of a single card when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    pub delay_s: f64,
    pub duration_s: f64,
    pub offset_y_px: f64,
    /// Play only the first time the card becomes visible.
    pub once: bool,
}

impl RevealConfig {
    fn card(delay_s: f64) -> Self {
        Self {
            delay_s,
            duration_s: 0.5,
            offset_y_px: 20.0,
            once: true,
        }
    }

    /// Delay of the card's badge/icon pop-in, which trails the card itself.
    pub fn badge_delay_s(&self) -> f64 {
        self.delay_s + 0.2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: &'static str,
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepCard {
    pub number: String,
    pub title: &'static str,
    pub description: &'static str,
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<T> {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    /// Network status pill above the headline.
    pub badge: String,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub actions: Vec<CallToAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Closing {
    pub heading: &'static str,
    pub body: &'static str,
    pub action: CallToAction,
}

/// The whole landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingPage {
    pub hero: Hero,
    pub features: Section<FeatureCard>,
    pub steps: Section<StepCard>,
    pub closing: Closing,
    pub stagger: StaggerConfig,
}

impl Default for LandingPage {
    fn default() -> Self {
        let features = [
            (
                "🔗",
                "Decentralized Markets",
                "Create and participate in prediction markets without intermediaries. Smart contracts ensure transparency and fairness.",
            ),
            (
                "💎",
                "Low Fees",
                "Benefit from minimal trading fees and maximum returns on your successful predictions.",
            ),
            (
                "⚡",
                "Instant Settlement",
                "Get your rewards instantly as soon as the market resolves. No waiting periods or manual processing.",
            ),
        ];
        let steps = [
            (
                "Connect Wallet",
                "Connect your Web3 wallet to get started. New to crypto? We'll guide you through the process.",
            ),
            (
                "Choose Markets",
                "Browse through available markets or create your own. Filter by category, volume, or end date.",
            ),
            (
                "Trade & Earn",
                "Take positions on outcomes you believe in and earn rewards when you're right.",
            ),
        ];

        Self {
            hero: Hero {
                badge: format!("Live on {NETWORK_NAME}"),
                headline: "Predict. Trade. Earn.",
                tagline: "Experience the future of prediction markets on our decentralized platform. Create markets, trade positions, and earn rewards in a transparent, trustless environment.",
                actions: vec![
                    CallToAction {
                        label: "Launch App",
                        route: MARKETS_ROUTE,
                        primary: true,
                    },
                    CallToAction {
                        label: "Get Test Tokens",
                        route: FAUCET_ROUTE,
                        primary: false,
                    },
                ],
            },
            features: Section {
                heading: "Why Choose Us",
                subheading: "Our platform combines the power of blockchain technology with an intuitive user experience to bring you the future of prediction markets.",
                items: features
                    .into_iter()
                    .enumerate()
                    .map(|(i, (icon, title, description))| FeatureCard {
                        icon,
                        title,
                        description,
                        reveal: RevealConfig::card(i as f64 * 0.2),
                    })
                    .collect(),
            },
            steps: Section {
                heading: "How It Works",
                subheading: "Get started with prediction markets in just a few simple steps",
                items: steps
                    .into_iter()
                    .enumerate()
                    .map(|(i, (title, description))| StepCard {
                        number: format!("{:02}", i + 1),
                        title,
                        description,
                        reveal: RevealConfig::card(i as f64 * 0.2),
                    })
                    .collect(),
            },
            closing: Closing {
                heading: "Ready to Start Predicting?",
                body: "Join thousands of traders already using our platform to trade on future outcomes",
                action: CallToAction {
                    label: "Explore Markets",
                    route: MARKETS_ROUTE,
                    primary: true,
                },
            },
            stagger: StaggerConfig::default(),
        }
    }
}

impl LandingPage {
    /// Every call to action on the page, top to bottom.
    pub fn actions(&self) -> impl Iterator<Item = &CallToAction> {
        self.hero
            .actions
            .iter()
            .chain(std::iter::once(&self.closing.action))
    }

    /// Entrance delay of hero item `index` under the stagger config.
    pub fn hero_item_delay_s(&self, index: usize) -> f64 {
        self.stagger.delay_children_s + self.stagger.stagger_children_s * index as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections() {
        let page = LandingPage::default();
        assert_eq!(page.hero.badge, "Live on Sepolia Network");
        assert_eq!(page.features.items.len(), 3);
        assert_eq!(page.steps.items.len(), 3);
        let numbers: Vec<_> = page.steps.items.iter().map(|s| s.number.as_str()).collect();
        assert_eq!(numbers, ["01", "02", "03"]);
        assert_eq!(page.features.items[1].title, "Low Fees");
    }

    #[test]
    fn test_card_reveal_delays() {
        let page = LandingPage::default();
        let delays: Vec<f64> = page.features.items.iter().map(|f| f.reveal.delay_s).collect();
        assert_eq!(delays, [0.0, 0.2, 0.4]);
        assert!((page.features.items[2].reveal.badge_delay_s() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_actions_and_routes() {
        let page = LandingPage::default();
        let routes: Vec<_> = page.actions().map(|a| a.route).collect();
        assert_eq!(routes, [MARKETS_ROUTE, FAUCET_ROUTE, MARKETS_ROUTE]);
        assert_eq!(page.actions().filter(|a| a.primary).count(), 2);
    }

    #[test]
    fn test_hero_stagger() {
        let page = LandingPage::default();
        assert!((page.hero_item_delay_s(0) - 0.2).abs() < 1e-6);
        assert!((page.hero_item_delay_s(2) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_value(LandingPage::default()).unwrap();
        assert_eq!(json["hero"]["headline"], "Predict. Trade. Earn.");
        assert_eq!(json["stagger"]["staggerChildrenS"].as_f64(), Some(0.3));
        assert_eq!(json["closing"]["action"]["route"], "/markets");
    }
}
