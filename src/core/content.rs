//! Static page content
//!
//! Copy, icons and figures rendered by the section components. Stat figures
//! are kept as display literals and parsed by [`super::counter::StatValue`].

use super::navigation::Section;

/// Phrases cycled by the hero typewriter
pub const TYPEWRITER_PHRASES: [&str; 4] = [
    "Data Intelligence",
    "AI Solutions",
    "ML Innovation",
    "Smart Analytics",
];

/// Model names rotated on the hero dashboard
pub const TRAINING_MODELS: [&str; 5] = [
    "Neural Network",
    "Random Forest",
    "SVM",
    "Deep Learning",
    "XGBoost",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const HERO_STATS: [HeroStat; 4] = [
    HeroStat {
        value: "50+",
        label: "Models Deployed",
        icon: "fas fa-robot",
        color: "#10B981",
    },
    HeroStat {
        value: "99.5%",
        label: "Uptime",
        icon: "fas fa-shield-alt",
        color: "#3B82F6",
    },
    HeroStat {
        value: "80%",
        label: "Accuracy Improvement",
        icon: "fas fa-chart-line",
        color: "#F59E0B",
    },
    HeroStat {
        value: "2.5M",
        label: "Data Points Processed",
        icon: "fas fa-database",
        color: "#8B5CF6",
    },
];

/// Badge floating over the hero background, positioned in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingBadge {
    pub name: &'static str,
    pub x: u8,
    pub y: u8,
    /// CSS float animation offset
    pub float_delay_ms: u32,
}

pub const FLOATING_BADGES: [FloatingBadge; 6] = [
    FloatingBadge { name: "TensorFlow", x: 45, y: 15, float_delay_ms: 0 },
    FloatingBadge { name: "PyTorch", x: 85, y: 15, float_delay_ms: 1000 },
    FloatingBadge { name: "Kubernetes", x: 70, y: 80, float_delay_ms: 2000 },
    FloatingBadge { name: "Apache Spark", x: 90, y: 80, float_delay_ms: 3000 },
    FloatingBadge { name: "dbt", x: 60, y: 80, float_delay_ms: 4000 },
    FloatingBadge { name: "Terraform", x: 75, y: 10, float_delay_ms: 500 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity {
    pub action: &'static str,
    pub time: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const RECENT_ACTIVITY: [Activity; 3] = [
    Activity { action: "Model deployed", time: "2min ago", icon: "fas fa-rocket", color: "text-green-400" },
    Activity { action: "Data pipeline optimized", time: "5min ago", icon: "fas fa-cog", color: "text-blue-400" },
    Activity { action: "Anomaly detected & resolved", time: "12min ago", icon: "fas fa-shield-alt", color: "text-yellow-400" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
    pub gradient: &'static str,
    pub icon_bg: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "fas fa-brain",
        title: "Machine Learning Solutions",
        description: "Custom ML models for predictive analytics, recommendation systems, and automated decision-making processes.",
        features: ["Supervised & Unsupervised Learning", "Deep Learning & Neural Networks", "MLOps & Model Deployment"],
        gradient: "from-blue-50 to-indigo-100",
        icon_bg: "bg-indigo-600",
    },
    Service {
        icon: "fas fa-chart-line",
        title: "Data Analytics & BI",
        description: "Transform your data into compelling stories with advanced analytics and interactive dashboards.",
        features: ["Real-time Dashboards", "Statistical Analysis", "Data Visualization"],
        gradient: "from-green-50 to-emerald-100",
        icon_bg: "bg-emerald-600",
    },
    Service {
        icon: "fas fa-robot",
        title: "AI Strategy & Consulting",
        description: "Strategic guidance to identify AI opportunities and develop roadmaps for successful implementation.",
        features: ["AI Readiness Assessment", "Technology Selection", "Implementation Planning"],
        gradient: "from-purple-50 to-violet-100",
        icon_bg: "bg-violet-600",
    },
    Service {
        icon: "fas fa-database",
        title: "Data Engineering",
        description: "Build robust data pipelines and infrastructure to support your analytics and ML initiatives.",
        features: ["Data Pipeline Development", "Cloud Architecture", "ETL/ELT Processes"],
        gradient: "from-red-50 to-pink-100",
        icon_bg: "bg-pink-600",
    },
    Service {
        icon: "fas fa-cog",
        title: "MLOps & Automation",
        description: "Streamline your machine learning operations with automated deployment and monitoring systems.",
        features: ["Model Versioning", "Automated Testing", "Performance Monitoring"],
        gradient: "from-orange-50 to-amber-100",
        icon_bg: "bg-amber-600",
    },
    Service {
        icon: "fas fa-graduation-cap",
        title: "Training & Workshops",
        description: "Empower your team with cutting-edge data science and ML skills through customized training programs.",
        features: ["Executive Workshops", "Technical Training", "Best Practices"],
        gradient: "from-teal-50 to-cyan-100",
        icon_bg: "bg-cyan-600",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [Feature; 2],
    pub highlight_icon: &'static str,
    pub highlight_title: &'static str,
    pub highlight_description: &'static str,
    /// Swap text and highlight columns on wide screens
    pub reversed: bool,
}

pub const SOLUTIONS: [Solution; 1] = [Solution {
    title: "Financial Services",
    description: "Advanced risk modeling and algorithmic trading solutions that help financial institutions make smarter decisions.",
    features: [
        Feature { title: "Risk Assessment", description: "ML-powered risk evaluation" },
        Feature { title: "Algo Trading", description: "Real-time algorithmic trading" },
    ],
    highlight_icon: "📊",
    highlight_title: "Portfolio Optimization",
    highlight_description: "AI-driven investment strategies with 15% better returns",
    reversed: false,
}];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const APPROACHES: [Approach; 3] = [
    Approach {
        icon: "fas fa-bullseye",
        title: "Business-First Methodology",
        description: "We start with your business goals and work backwards to the technical solution",
    },
    Approach {
        icon: "fas fa-rocket",
        title: "Agile & Iterative",
        description: "Rapid prototyping and continuous improvement ensure fast time-to-value",
    },
    Approach {
        icon: "fas fa-hands-helping",
        title: "End-to-End Ownership",
        description: "From strategy to deployment and beyond, we're with you every step of the way",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AboutStat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const ABOUT_STATS: [AboutStat; 3] = [
    AboutStat { number: "10+", label: "Projects Delivered", icon: "fas fa-project-diagram", color: "text-blue-500" },
    AboutStat { number: "95%", label: "Client Satisfaction", icon: "fas fa-heart", color: "text-red-500" },
    AboutStat { number: "5+", label: "Years Experience", icon: "fas fa-calendar-alt", color: "text-green-500" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechnologyCategory {
    pub name: &'static str,
    pub technologies: &'static [Technology],
}

const fn tech(
    name: &'static str,
    icon: &'static str,
    color: &'static str,
    description: &'static str,
) -> Technology {
    Technology {
        name,
        icon,
        color,
        description,
    }
}

pub const TECHNOLOGY_CATEGORIES: [TechnologyCategory; 5] = [
    TechnologyCategory {
        name: "Programming Languages",
        technologies: &[
            tech("Python", "fab fa-python", "#3776ab", "Primary language for ML & data science"),
            tech("SQL", "fas fa-database", "#336791", "Database querying & management"),
            tech("Typescript", "fas fa-code", "#276DC3", "Website and ui development"),
            tech("Rust", "fas fa-stream", "#DC322F", "Compiled or high-performance applications"),
        ],
    },
    TechnologyCategory {
        name: "Machine Learning Frameworks",
        technologies: &[
            tech("TensorFlow", "fas fa-brain", "#FF6F00", "Deep learning & neural networks"),
            tech("PyTorch", "fas fa-fire", "#EE4C2C", "Research-oriented ML framework"),
            tech("Scikit-learn", "fas fa-chart-line", "#F7931E", "Classical machine learning"),
            tech("Hugging Face", "fas fa-robot", "#FFD21E", "NLP & transformer models"),
        ],
    },
    TechnologyCategory {
        name: "Cloud Platforms",
        technologies: &[
            tech("AWS", "fab fa-aws", "#FF9900", "Amazon Web Services"),
            tech("Azure", "fab fa-microsoft", "#0078D4", "Microsoft cloud platform"),
            tech("GCP", "fab fa-google", "#4285F4", "Google Cloud Platform"),
            tech("Databricks", "fas fa-cloud", "#FF3621", "Unified analytics platform"),
        ],
    },
    TechnologyCategory {
        name: "Data Engineering",
        technologies: &[
            tech("Apache Kafka", "fas fa-stream", "#231F20", "Real-time data streaming"),
            tech("Apache Airflow", "fas fa-wind", "#017CEE", "Workflow orchestration"),
            tech("Airbyte", "fas fa-exchange-alt", "#615EFF", "Data integration platform"),
            tech("Apache Spark", "fas fa-bolt", "#E25A1C", "Big data processing"),
            tech("MinIO", "fas fa-hdd", "#C72E29", "Object storage solution"),
            tech("dbt", "fas fa-table", "#FF694B", "Data transformation tool"),
        ],
    },
    TechnologyCategory {
        name: "Infrastructure & DevOps",
        technologies: &[
            tech("GitHub", "fab fa-github", "#0c4bd2", "Code versioning and process orchestration"),
            tech("GitLab", "fab fa-gitlab", "#e24329", "Code versioning and process orchestration"),
            tech("Kubernetes", "fas fa-dharmachakra", "#32e56e", "Container orchestration"),
            tech("Docker", "fab fa-docker", "#2496ED", "Containerization platform"),
            tech("Terraform", "fas fa-cubes", "#7B42BC", "Infrastructure as code"),
        ],
    },
];

/// Footer link scrolling to a page section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterLink {
    pub name: &'static str,
    pub section: Section,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Services",
        links: &[
            FooterLink { name: "Machine Learning", section: Section::Services },
            FooterLink { name: "Data Analytics", section: Section::Services },
            FooterLink { name: "AI Strategy", section: Section::Services },
            FooterLink { name: "MLOps", section: Section::Services },
        ],
    },
    FooterColumn {
        title: "Industries",
        links: &[FooterLink { name: "Financial Services", section: Section::Solutions }],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/company/mimir-software-factory/",
        icon: "fab fa-linkedin",
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/mimir-software-factory",
        icon: "fab fa-github",
    },
];
