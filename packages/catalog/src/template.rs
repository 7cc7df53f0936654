use crate::kind::TemplateKind;
use crate::node::{Node, Tag};
use serde::Serialize;
use std::sync::OnceLock;

/// A renderable archetype: a structural tree with editable regions plus
/// the canonical source string that edits are applied against.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub kind: TemplateKind,
    pub tree: Node,
    pub code: &'static str,
}

static CATALOG: OnceLock<[Template; 4]> = OnceLock::new();

/// Every template in the registry. Built once, lives for the process.
pub fn catalog() -> &'static [Template] {
    CATALOG.get_or_init(|| [landing_page(), dashboard(), form(), card()])
}

/// Fetch the template for a kind. Total: every kind has a catalog entry.
pub fn lookup(kind: TemplateKind) -> &'static Template {
    let catalog = catalog();
    match kind {
        TemplateKind::LandingPage => &catalog[0],
        TemplateKind::Dashboard => &catalog[1],
        TemplateKind::Form => &catalog[2],
        TemplateKind::Card => &catalog[3],
    }
}

/// Scan the registry for a kind. [`lookup`] is total; this exists for
/// renderers that keep a missing-entry guard anyway.
pub fn find(kind: TemplateKind) -> Option<&'static Template> {
    catalog().iter().find(|template| template.kind == kind)
}

const LANDING_PAGE_CODE: &str = r#"export default function LandingPage() {
  return (
    <div className="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
      <div className="container mx-auto px-4 py-16">
        <div className="text-center mb-16">
          <h1 className="text-5xl font-bold text-gray-900 mb-6">
            Welcome to Our Platform
          </h1>
          <p className="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
            Build amazing experiences with our cutting-edge tools and services
          </p>
          <div className="flex gap-4 justify-center">
            <button className="bg-blue-600 text-white px-8 py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors">
              Get Started
            </button>
            <button className="border border-gray-300 text-gray-700 px-8 py-3 rounded-lg font-semibold hover:bg-gray-50 transition-colors">
              Learn More
            </button>
          </div>
        </div>
        <div className="grid md:grid-cols-3 gap-8">
          {[1, 2, 3].map((i) => (
            <div key={i} className="bg-white p-6 rounded-xl shadow-lg">
              <div className="w-12 h-12 bg-blue-100 rounded-lg mb-4 flex items-center justify-center">
                <div className="w-6 h-6 bg-blue-600 rounded"></div>
              </div>
              <h3 className="text-xl font-semibold mb-2">Feature {i}</h3>
              <p className="text-gray-600">
                Description of amazing feature {i} that helps users achieve their goals
              </p>
            </div>
          ))}
        </div>
      </div>
    </div>
  )
}"#;

const DASHBOARD_CODE: &str = r#"export default function Dashboard() {
  return (
    <div className="min-h-screen bg-gray-50">
      <div className="bg-white shadow-sm border-b">
        <div className="container mx-auto px-4 py-4">
          <div className="flex items-center justify-between">
            <h1 className="text-2xl font-bold text-gray-900">Dashboard</h1>
            <button className="bg-blue-600 text-white px-4 py-2 rounded-lg">New Project</button>
          </div>
        </div>
      </div>
      <div className="container mx-auto px-4 py-8">
        <div className="grid md:grid-cols-4 gap-6 mb-8">
          {["Total Users", "Revenue", "Projects", "Growth"].map((metric, i) => (
            <div key={i} className="bg-white p-6 rounded-lg shadow-sm">
              <h3 className="text-sm font-medium text-gray-500 mb-2">{metric}</h3>
              <p className="text-3xl font-bold text-gray-900">
                {["1,234", "$12,345", "56", "+12%"][i]}
              </p>
            </div>
          ))}
        </div>
      </div>
    </div>
  )
}"#;

const FORM_CODE: &str = r#"export default function ContactForm() {
  return (
    <div className="min-h-screen bg-gray-50 flex items-center justify-center p-4">
      <div className="bg-white p-8 rounded-xl shadow-lg w-full max-w-md">
        <h2 className="text-2xl font-bold text-center mb-6">Contact Us</h2>
        <form className="space-y-4">
          <div>
            <label className="block text-sm font-medium text-gray-700 mb-1">Name</label>
            <input
              type="text"
              className="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
              placeholder="Your name"
            />
          </div>
          <div>
            <label className="block text-sm font-medium text-gray-700 mb-1">Email</label>
            <input
              type="email"
              className="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
              placeholder="your@email.com"
            />
          </div>
          <button
            type="submit"
            className="w-full bg-blue-600 text-white py-2 px-4 rounded-lg font-semibold hover:bg-blue-700 transition-colors"
          >
            Send Message
          </button>
        </form>
      </div>
    </div>
  )
}"#;

const CARD_CODE: &str = r#"export default function ProductCard() {
  return (
    <div className="min-h-screen bg-gray-100 flex items-center justify-center p-4">
      <div className="bg-white rounded-xl shadow-lg overflow-hidden max-w-sm">
        <div className="h-48 bg-gradient-to-r from-purple-400 to-pink-400"></div>
        <div className="p-6">
          <h3 className="text-xl font-semibold mb-2">Product Card</h3>
          <p className="text-gray-600 mb-4">
            This is a beautiful product card with an attractive design and clean layout.
          </p>
          <div className="flex items-center justify-between">
            <span className="text-2xl font-bold text-green-600">$99</span>
            <button className="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors">
              Buy Now
            </button>
          </div>
        </div>
      </div>
    </div>
  )
}"#;

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";

fn landing_page() -> Template {
    let feature = |i: usize| {
        Node::element("div")
            .with_class("bg-white p-6 rounded-xl shadow-lg")
            .with_child(
                Node::element("div")
                    .with_class("w-12 h-12 bg-blue-100 rounded-lg mb-4 flex items-center justify-center")
                    .with_child(Node::element("div").with_class("w-6 h-6 bg-blue-600 rounded")),
            )
            .with_child(
                Node::region(format!("features.{i}.title"), Tag::H3, format!("Feature {i}"))
                    .with_class("text-xl font-semibold mb-2"),
            )
            .with_child(
                Node::region(
                    format!("features.{i}.description"),
                    Tag::Paragraph,
                    format!("Description of amazing feature {i} that helps users achieve their goals"),
                )
                .with_class("text-gray-600"),
            )
    };

    Template {
        kind: TemplateKind::LandingPage,
        code: LANDING_PAGE_CODE,
        tree: Node::element("div")
            .with_class("min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100")
            .with_child(
                Node::element("div")
                    .with_class("container mx-auto px-4 py-16")
                    .with_child(
                        Node::element("div")
                            .with_class("text-center mb-16")
                            .with_child(
                                Node::region("hero.title", Tag::H1, "Welcome to Our Platform")
                                    .with_class("text-5xl font-bold text-gray-900 mb-6"),
                            )
                            .with_child(
                                Node::region(
                                    "hero.subtitle",
                                    Tag::Paragraph,
                                    "Build amazing experiences with our cutting-edge tools and services",
                                )
                                .with_class("text-xl text-gray-600 mb-8 max-w-2xl mx-auto"),
                            )
                            .with_child(
                                Node::element("div")
                                    .with_class("flex gap-4 justify-center")
                                    .with_child(
                                        Node::region("hero.primaryButton", Tag::Button, "Get Started")
                                            .with_class("bg-blue-600 text-white px-8 py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors cursor-pointer")
                                            .with_style_props(&["backgroundColor", "color", "borderRadius"]),
                                    )
                                    .with_child(
                                        Node::region("hero.secondaryButton", Tag::Button, "Learn More")
                                            .with_class("border border-gray-300 text-gray-700 px-8 py-3 rounded-lg font-semibold hover:bg-gray-50 transition-colors cursor-pointer")
                                            .with_style_props(&["backgroundColor", "color", "borderColor"]),
                                    ),
                            ),
                    )
                    .with_child(
                        Node::element("div")
                            .with_class("grid md:grid-cols-3 gap-8")
                            .with_children((1..=3).map(feature).collect()),
                    ),
            ),
    }
}

const METRIC_LABELS: [&str; 4] = ["Total Users", "Revenue", "Projects", "Growth"];
const METRIC_VALUES: [&str; 4] = ["1,234", "$12,345", "56", "+12%"];

fn dashboard() -> Template {
    let metric = |i: usize| {
        Node::element("div")
            .with_class("bg-white p-6 rounded-lg shadow-sm")
            .with_child(
                Node::region(format!("metrics.{i}.label"), Tag::H3, METRIC_LABELS[i])
                    .with_class("text-sm font-medium text-gray-500 mb-2"),
            )
            .with_child(
                Node::region(format!("metrics.{i}.value"), Tag::Paragraph, METRIC_VALUES[i])
                    .with_class("text-3xl font-bold text-gray-900"),
            )
    };

    Template {
        kind: TemplateKind::Dashboard,
        code: DASHBOARD_CODE,
        tree: Node::element("div")
            .with_class("min-h-screen bg-gray-50")
            .with_child(
                Node::element("div")
                    .with_class("bg-white shadow-sm border-b")
                    .with_child(
                        Node::element("div")
                            .with_class("container mx-auto px-4 py-4")
                            .with_child(
                                Node::element("div")
                                    .with_class("flex items-center justify-between")
                                    .with_child(
                                        Node::region("header.title", Tag::H1, "Dashboard")
                                            .with_class("text-2xl font-bold text-gray-900"),
                                    )
                                    .with_child(
                                        Node::region("header.button", Tag::Button, "New Project")
                                            .with_class("bg-blue-600 text-white px-4 py-2 rounded-lg cursor-pointer")
                                            .with_style_props(&["backgroundColor", "color"]),
                                    ),
                            ),
                    ),
            )
            .with_child(
                Node::element("div")
                    .with_class("container mx-auto px-4 py-8")
                    .with_child(
                        Node::element("div")
                            .with_class("grid md:grid-cols-4 gap-6 mb-8")
                            .with_children((0..4).map(metric).collect()),
                    ),
            ),
    }
}

fn form() -> Template {
    Template {
        kind: TemplateKind::Form,
        code: FORM_CODE,
        tree: Node::element("div")
            .with_class("min-h-screen bg-gray-50 flex items-center justify-center p-4")
            .with_child(
                Node::element("div")
                    .with_class("bg-white p-8 rounded-xl shadow-lg w-full max-w-md")
                    .with_child(
                        Node::region("form.title", Tag::H2, "Contact Us")
                            .with_class("text-2xl font-bold text-center mb-6"),
                    )
                    .with_child(
                        Node::element("form")
                            .with_class("space-y-4")
                            .with_child(
                                Node::element("div")
                                    .with_child(
                                        Node::region("form.nameLabel", Tag::Label, "Name")
                                            .with_class("block text-sm font-medium text-gray-700 mb-1"),
                                    )
                                    .with_child(
                                        Node::element("input")
                                            .with_class(INPUT_CLASS)
                                            .with_attr("type", "text")
                                            .with_attr("placeholder", "Your name"),
                                    ),
                            )
                            .with_child(
                                Node::element("div")
                                    .with_child(
                                        Node::region("form.emailLabel", Tag::Label, "Email")
                                            .with_class("block text-sm font-medium text-gray-700 mb-1"),
                                    )
                                    .with_child(
                                        Node::element("input")
                                            .with_class(INPUT_CLASS)
                                            .with_attr("type", "email")
                                            .with_attr("placeholder", "your@email.com"),
                                    ),
                            )
                            .with_child(
                                Node::region("form.submitButton", Tag::Button, "Send Message")
                                    .with_class("w-full bg-blue-600 text-white py-2 px-4 rounded-lg font-semibold hover:bg-blue-700 transition-colors cursor-pointer")
                                    .with_style_props(&["backgroundColor", "color"]),
                            ),
                    ),
            ),
    }
}

fn card() -> Template {
    Template {
        kind: TemplateKind::Card,
        code: CARD_CODE,
        tree: Node::element("div")
            .with_class("min-h-screen bg-gray-100 flex items-center justify-center p-4")
            .with_child(
                Node::element("div")
                    .with_class("bg-white rounded-xl shadow-lg overflow-hidden max-w-sm")
                    .with_child(
                        Node::element("div").with_class("h-48 bg-gradient-to-r from-purple-400 to-pink-400"),
                    )
                    .with_child(
                        Node::element("div")
                            .with_class("p-6")
                            .with_child(
                                Node::region("card.title", Tag::H3, "Product Card")
                                    .with_class("text-xl font-bold mb-2"),
                            )
                            .with_child(
                                Node::region(
                                    "card.description",
                                    Tag::Paragraph,
                                    "This is a beautiful product card with an attractive design and clean layout.",
                                )
                                .with_class("text-gray-600 mb-4"),
                            )
                            .with_child(
                                Node::element("div")
                                    .with_class("flex items-center justify-between")
                                    .with_child(
                                        Node::region("card.price", Tag::Span, "$99")
                                            .with_class("text-2xl font-bold text-green-600")
                                            .with_style_props(&["color"]),
                                    )
                                    .with_child(
                                        Node::region("card.button", Tag::Button, "Buy Now")
                                            .with_class("bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors cursor-pointer")
                                            .with_style_props(&["backgroundColor", "color"]),
                                    ),
                            ),
                    ),
            ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::classify;
    use std::collections::HashSet;

    fn region_paths(template: &Template) -> Vec<String> {
        let mut paths = Vec::new();
        template
            .tree
            .visit_regions(&mut |node| paths.push(node.path().unwrap().to_string()));
        paths
    }

    #[test]
    fn test_every_kind_has_a_template() {
        for kind in TemplateKind::ALL {
            assert_eq!(lookup(kind).kind, kind);
            assert_eq!(find(kind).map(|t| t.kind), Some(kind));
        }
        assert_eq!(catalog().len(), 4);
    }

    #[test]
    fn test_region_paths_are_unique_per_template() {
        for template in catalog() {
            let paths = region_paths(template);
            let unique: HashSet<_> = paths.iter().collect();
            assert_eq!(unique.len(), paths.len(), "{} has duplicate paths", template.kind);
        }
    }

    #[test]
    fn test_documented_region_sets() {
        let landing = region_paths(lookup(TemplateKind::LandingPage));
        assert!(landing.contains(&"hero.title".to_string()));
        assert!(landing.contains(&"hero.primaryButton".to_string()));
        assert!(landing.contains(&"features.3.description".to_string()));
        assert_eq!(landing.len(), 10);

        let dashboard = region_paths(lookup(TemplateKind::Dashboard));
        assert!(dashboard.contains(&"header.title".to_string()));
        assert!(dashboard.contains(&"metrics.0.label".to_string()));
        assert!(dashboard.contains(&"metrics.3.value".to_string()));
        assert_eq!(dashboard.len(), 10);

        let form = region_paths(lookup(TemplateKind::Form));
        assert_eq!(form, ["form.title", "form.nameLabel", "form.emailLabel", "form.submitButton"]);

        let card = region_paths(lookup(TemplateKind::Card));
        assert_eq!(card, ["card.title", "card.description", "card.price", "card.button"]);
    }

    #[test]
    fn test_styled_regions_declare_properties() {
        let mut styled = Vec::new();
        for template in catalog() {
            template.tree.visit_regions(&mut |node| {
                if let Node::Region { path, style_props, .. } = node {
                    if !style_props.is_empty() {
                        assert!(style_props.iter().all(|p| !p.is_empty()));
                        styled.push(path.clone());
                    }
                }
            });
        }
        assert_eq!(
            styled,
            [
                "hero.primaryButton",
                "hero.secondaryButton",
                "header.button",
                "form.submitButton",
                "card.price",
                "card.button",
            ]
        );
    }

    #[test]
    fn test_canonical_code_carries_stable_region_texts() {
        // Every non-interpolated region default appears verbatim in the
        // canonical source, which is what makes text patching land.
        let cases = [
            (TemplateKind::LandingPage, vec!["Welcome to Our Platform", "Get Started", "Learn More"]),
            (TemplateKind::Dashboard, vec!["Dashboard", "New Project", "Total Users", "$12,345"]),
            (TemplateKind::Form, vec!["Contact Us", "Name", "Email", "Send Message"]),
            (TemplateKind::Card, vec!["Product Card", "$99", "Buy Now"]),
        ];
        for (kind, texts) in cases {
            let template = lookup(kind);
            for text in texts {
                assert!(template.code.contains(text), "{} missing {:?}", kind, text);
            }
        }
    }

    #[test]
    fn test_feature_grid_texts_are_interpolated_in_canonical() {
        // The landing canonical renders features from a map expression, so
        // the instantiated defaults ("Feature 1") never occur literally.
        // Text patches against them are silent no-ops by design.
        let landing = lookup(TemplateKind::LandingPage);
        assert!(landing.code.contains("Feature {i}"));
        assert!(!landing.code.contains("Feature 1"));
    }

    #[test]
    fn test_canonical_code_classification() {
        assert_eq!(classify(lookup(TemplateKind::Dashboard).code), TemplateKind::Dashboard);
        assert_eq!(classify(lookup(TemplateKind::Form).code), TemplateKind::Form);
        assert_eq!(classify(lookup(TemplateKind::Card).code), TemplateKind::Card);
        // Quirk, preserved on purpose: "Platform" contains "form", so the
        // landing canonical re-classifies as Form once adopted as code.
        assert_eq!(classify(lookup(TemplateKind::LandingPage).code), TemplateKind::Form);
    }
}
