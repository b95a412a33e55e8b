//! Landing page content
//!
//! Static records rendered by the page sections. Builders return
//! [`ItemSet`]s so rotators can be sized directly from them.

use serde::Serialize;

use crate::items::ItemSet;
use crate::navigation::{NavItem, NavLink};

/// A client quote in the testimonial carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Quote text
    pub content: &'static str,
    /// Person quoted
    pub author: &'static str,
    /// Title and company
    pub position: &'static str,
    /// Star rating out of 5
    pub rating: u8,
    /// Project category badge
    pub category: &'static str,
}

/// A featured product tab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub title: &'static str,
    /// Short pitch
    pub description: &'static str,
    /// Feature bullet list
    pub features: &'static [&'static str],
    /// Call-to-action label
    pub cta_text: &'static str,
    /// Product page route
    pub link: &'static str,
    /// Accent color as `#rrggbb`
    pub accent_color: &'static str,
}

/// A service card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    /// Stable identifier, used for category membership
    pub id: &'static str,
    /// Card icon
    pub icon: &'static str,
    /// Display name
    pub title: &'static str,
    /// Short pitch
    pub description: &'static str,
    /// Feature bullet list
    pub features: &'static [&'static str],
    /// Service page route
    pub link: &'static str,
}

/// Service filter tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Every service
    All,
    /// ML and LLM work
    MachineLearning,
    /// Data engineering
    Data,
    /// APIs and deployment
    Development,
}

impl ServiceCategory {
    /// Tabs in display order
    pub const ALL: [ServiceCategory; 4] = [Self::All, Self::MachineLearning, Self::Data, Self::Development];

    /// Tab label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Services",
            Self::MachineLearning => "Machine Learning",
            Self::Data => "Data Engineering",
            Self::Development => "Development",
        }
    }

    /// Category shown by tab `index`
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether the service with `service_id` is listed under this tab
    #[must_use]
    pub fn includes(self, service_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::MachineLearning => matches!(service_id, "ml-solutions" | "llm-fine-tuning"),
            Self::Data => service_id == "data-engineering",
            Self::Development => matches!(service_id, "api-development" | "cloud-deployment"),
        }
    }
}

/// A headline figure in the testimonial section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Figure as displayed
    pub value: &'static str,
    /// Caption
    pub label: &'static str,
}

/// A selling point in the call-to-action section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CtaFeature {
    /// Heading
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// Hero headline
pub const HERO_HEADLINE: &str = "Powering Innovation with Python Excellence";

/// Lead-in before the typed phrase
pub const HERO_LEAD: &str = "We build scalable solutions for ";

/// Phrases cycled by the hero typewriter
pub const HERO_PHRASES: [&str; 5] = [
    "ML pipelines",
    "data processing at scale",
    "AI-driven solutions",
    "LLM fine-tuning",
    "Python excellence",
];

/// Code snippet chunks revealed in the hero, in order
pub const CODE_SNIPPET: [&str; 7] = [
    "import pycoder",
    "\n\nsolution = pycoder.solve(",
    "\n    your_complex_problem,",
    "\n    scale=True,",
    "\n    optimize_performance=True",
    "\n)",
    "\n\n# Deployment ready in 3.2s",
];

/// Services subtitle
pub const SERVICES_SUBTITLE: &str =
    "We leverage Python's powerful ecosystem to deliver scalable, efficient solutions for your business";

/// Products subtitle
pub const PRODUCTS_SUBTITLE: &str = "Powerful Python-based tools to accelerate your data and ML workflows";

/// Testimonials subtitle
pub const TESTIMONIALS_SUBTITLE: &str = "See how our Python expertise has transformed businesses across industries";

/// Call-to-action heading
pub const CTA_HEADLINE: &str = "Ready to Transform Your Python Development?";

/// Call-to-action subtitle
pub const CTA_SUBTITLE: &str =
    "Get started with Pycoder Tech today and leverage our expertise for your next project.";

/// Newsletter pitch above the form
pub const NEWSLETTER_PITCH: &str =
    "Subscribe to our newsletter for the latest Python development insights and updates.";

/// Newsletter confirmation heading
pub const SUBSCRIBED_HEADLINE: &str = "Thank you for subscribing!";

/// Newsletter confirmation body
pub const SUBSCRIBED_MESSAGE: &str =
    "We'll send you our best content directly to your inbox. No spam, just valuable Python insights.";

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        content: "Pycoder Tech transformed our data processing pipeline. Their Python expertise helped us reduce processing time by a substantial 70% while improving accuracy.",
        author: "Sarah Johnson",
        position: "CTO, DataFlow Inc.",
        rating: 5,
        category: "Data Processing",
    },
    Testimonial {
        content: "The machine learning solution built by Pycoder Tech allowed us to predict customer behavior with remarkable accuracy, driving a 35% increase in conversion rates.",
        author: "Michael Chen",
        position: "Head of Analytics, RetailGenius",
        rating: 5,
        category: "Machine Learning",
    },
    Testimonial {
        content: "Working with Pycoder Tech on our LLM fine-tuning project was a game-changer. They understood our domain and delivered a model that truly reflects our expertise.",
        author: "Emma Rodriguez",
        position: "AI Director, TechSolutions Global",
        rating: 5,
        category: "LLM Fine-tuning",
    },
    Testimonial {
        content: "Their API development expertise helped us connect previously siloed systems. The performance and documentation were exceptional.",
        author: "David Kim",
        position: "VP of Engineering, ConnectSphere",
        rating: 5,
        category: "API Development",
    },
    Testimonial {
        content: "Pycoder Tech's consulting services gave us the roadmap we needed to modernize our Python-based architecture. Their insights saved us months of trial and error.",
        author: "Lisa Thompson",
        position: "Enterprise Architect, FinServ Co.",
        rating: 5,
        category: "Architecture",
    },
];

const PRODUCTS: [Product; 3] = [
    Product {
        id: "pyanalytics",
        title: "PyAnalytics",
        description: "Advanced analytics platform with built-in ML capabilities for processing large datasets.",
        features: &[
            "Real-time data processing",
            "Customizable visualization dashboards",
            "Automated ML model training",
            "API integrations",
        ],
        cta_text: "Explore PyAnalytics",
        link: "/products/pyanalytics",
        accent_color: "#3b82f6",
    },
    Product {
        id: "llmstudio",
        title: "LLM Studio",
        description: "Fine-tune and deploy large language models with our easy-to-use studio interface.",
        features: &[
            "No-code fine-tuning",
            "Custom knowledge base integration",
            "Deployment pipeline automation",
            "Performance monitoring",
        ],
        cta_text: "Discover LLM Studio",
        link: "/products/llmstudio",
        accent_color: "#8b5cf6",
    },
    Product {
        id: "dataflow",
        title: "DataFlow Engine",
        description: "Distributed data processing framework built for scale and performance.",
        features: &[
            "Parallel data processing",
            "Fault-tolerant architecture",
            "Visual workflow designer",
            "Kubernetes integration",
        ],
        cta_text: "Learn More",
        link: "/products/dataflow",
        accent_color: "#14b8a6",
    },
];

const SERVICES: [Service; 6] = [
    Service {
        id: "ml-solutions",
        icon: "🧠",
        title: "Machine Learning Solutions",
        description: "Custom ML models and pipelines that solve real business problems. From model training to deployment and monitoring.",
        features: &["Model Development", "Pipeline Engineering", "AutoML Solutions", "Model Monitoring"],
        link: "/services/ml-solutions",
    },
    Service {
        id: "data-engineering",
        icon: "📊",
        title: "Data Engineering",
        description: "Scalable data processing solutions using Python, PySpark, and Dask for handling big data efficiently.",
        features: &["ETL Pipelines", "Data Warehousing", "Stream Processing", "Data Lake Architecture"],
        link: "/services/data-engineering",
    },
    Service {
        id: "api-development",
        icon: "🔌",
        title: "API Development",
        description: "High-performance APIs built with FastAPI, Flask, or Django that connect your systems and services.",
        features: &["RESTful APIs", "GraphQL", "API Gateway Integration", "Microservice Architecture"],
        link: "/services/api-development",
    },
    Service {
        id: "cloud-deployment",
        icon: "☁️",
        title: "Cloud Deployment",
        description: "Seamless deployment of Python applications to AWS, GCP, or Azure with containerization and orchestration.",
        features: &["Docker & Kubernetes", "Serverless Deployment", "CI/CD Integration", "Infrastructure as Code"],
        link: "/services/cloud-deployment",
    },
    Service {
        id: "llm-fine-tuning",
        icon: "🤖",
        title: "LLM Fine-Tuning",
        description: "Customize large language models for your specific business needs and domain knowledge.",
        features: &["Model Customization", "Prompt Engineering", "Knowledge Base Integration", "Retrieval Augmentation"],
        link: "/services/llm-fine-tuning",
    },
    Service {
        id: "consulting",
        icon: "💼",
        title: "Technical Consulting",
        description: "Expert guidance on Python technology stack, architecture design, and solution implementation.",
        features: &["Architecture Design", "Code Review", "Performance Optimization", "Technology Selection"],
        link: "/services/consulting",
    },
];

const STATS: [Stat; 4] = [
    Stat {
        value: "98%",
        label: "Client Satisfaction",
    },
    Stat {
        value: "145+",
        label: "Projects Completed",
    },
    Stat {
        value: "62%",
        label: "Performance Gain",
    },
    Stat {
        value: "24/7",
        label: "Support Availability",
    },
];

const CTA_FEATURES: [CtaFeature; 3] = [
    CtaFeature {
        title: "Lightning Fast",
        description: "Our solutions are optimized for maximum performance and efficiency.",
    },
    CtaFeature {
        title: "Enterprise Security",
        description: "Your data and systems are protected with industry-leading security practices.",
    },
    CtaFeature {
        title: "Scalable Solutions",
        description: "Built to grow with your business from startup to enterprise scale.",
    },
];

const SERVICE_LINKS: &[NavLink] = &[
    NavLink {
        name: "ML Development",
        path: "/services/ml-development",
    },
    NavLink {
        name: "Data Engineering",
        path: "/services/data-engineering",
    },
    NavLink {
        name: "API Development",
        path: "/services/api-development",
    },
    NavLink {
        name: "LLM Fine-tuning",
        path: "/services/llm-fine-tuning",
    },
];

const PRODUCT_LINKS: &[NavLink] = &[
    NavLink {
        name: "PyAnalytics",
        path: "/products/pyanalytics",
    },
    NavLink {
        name: "LLM Studio",
        path: "/products/llm-studio",
    },
    NavLink {
        name: "DataFlow Engine",
        path: "/products/dataflow",
    },
];

const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "About",
        path: "/about",
        dropdown: &[],
    },
    NavItem {
        name: "Services",
        path: "/services",
        dropdown: SERVICE_LINKS,
    },
    NavItem {
        name: "Products",
        path: "/products",
        dropdown: PRODUCT_LINKS,
    },
    NavItem {
        name: "Blog",
        path: "/blog",
        dropdown: &[],
    },
    NavItem {
        name: "Careers",
        path: "/careers",
        dropdown: &[],
    },
];

/// Client testimonials
#[must_use]
pub fn testimonials() -> ItemSet<Testimonial> {
    ItemSet::from_static(TESTIMONIALS.to_vec())
}

/// Featured products
#[must_use]
pub fn products() -> ItemSet<Product> {
    ItemSet::from_static(PRODUCTS.to_vec())
}

/// Service cards
#[must_use]
pub fn services() -> ItemSet<Service> {
    ItemSet::from_static(SERVICES.to_vec())
}

/// Impact stats
#[must_use]
pub fn stats() -> ItemSet<Stat> {
    ItemSet::from_static(STATS.to_vec())
}

/// Call-to-action selling points
#[must_use]
pub fn cta_features() -> ItemSet<CtaFeature> {
    ItemSet::from_static(CTA_FEATURES.to_vec())
}

/// Navbar entries
#[must_use]
pub fn nav_items() -> ItemSet<NavItem> {
    ItemSet::from_static(NAV_ITEMS.to_vec())
}

/// Typewriter phrases
#[must_use]
pub fn hero_phrases() -> ItemSet<&'static str> {
    ItemSet::from_static(HERO_PHRASES.to_vec())
}

/// Hero code snippet chunks
#[must_use]
pub fn code_snippet() -> ItemSet<&'static str> {
    ItemSet::from_static(CODE_SNIPPET.to_vec())
}
