//! Default content inserted into an empty store.

pub struct SeedSettings {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

pub struct SeedSkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct SeedBadge {
    pub label: &'static str,
    pub detail: &'static str,
}

pub struct SeedBlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub published_on: &'static str, // YYYY-MM-DD
    pub summary: &'static str,
    pub body: &'static str,
}

pub struct SeedResearch {
    pub slug: &'static str,
    pub title: &'static str,
    pub venue: &'static str,
    pub year: i32,
    pub summary: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
}

pub struct SeedExperience {
    pub role: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub started: &'static str,
    pub ended: &'static str,
    pub description: &'static str,
}

pub const SETTINGS: SeedSettings = SeedSettings {
    name: "Jordan Avery",
    tagline: "Systems engineer working on storage engines and applied ML infrastructure.",
    email: "hello@example.com",
    location: "Toronto, Canada",
    github_url: "https://github.com/example",
    linkedin_url: "https://www.linkedin.com/in/example",
};

pub const ABOUT: &[&str] = &[
    "I build backend systems that stay boring under load: storage engines, \
     query planners and the plumbing that connects them.",
    "Lately I have been working on <strong>learned indexes</strong> and on making \
     ML training pipelines reproducible end to end.",
    "Outside of work I write about databases, teach an evening course on \
     distributed systems, and contribute to open-source Rust tooling.",
];

pub const SKILL_GROUPS: &[SeedSkillGroup] = &[
    SeedSkillGroup {
        name: "Languages",
        skills: &["Rust", "Go", "Python", "SQL"],
    },
    SeedSkillGroup {
        name: "Infrastructure",
        skills: &["PostgreSQL", "Kafka", "Kubernetes", "Terraform"],
    },
    SeedSkillGroup {
        name: "Research",
        skills: &["Learned indexes", "Query optimization", "Benchmarking"],
    },
];

pub const BADGES: &[SeedBadge] = &[
    SeedBadge {
        label: "10+ years",
        detail: "building production backends",
    },
    SeedBadge {
        label: "3 papers",
        detail: "published at database venues",
    },
    SeedBadge {
        label: "Open source",
        detail: "maintainer of two storage crates",
    },
];

pub const BLOG_POSTS: &[SeedBlogPost] = &[
    SeedBlogPost {
        slug: "why-b-trees-still-win",
        title: "Why B-trees still win",
        published_on: "2024-05-12",
        summary: "A practical look at when learned indexes beat B-trees, and when they do not.",
        body: "<p>Learned indexes look great on static data. Once inserts arrive, \
               the story changes.</p>",
    },
    SeedBlogPost {
        slug: "reproducible-training-runs",
        title: "Reproducible training runs on a budget",
        published_on: "2023-11-02",
        summary: "Pinning data, code and seeds without a platform team.",
        body: "<p>Reproducibility is mostly bookkeeping. Here is the minimum that worked for us.</p>",
    },
];

pub const RESEARCH: &[SeedResearch] = &[
    SeedResearch {
        slug: "adaptive-learned-indexes",
        title: "Adaptive Learned Indexes for Write-Heavy Workloads",
        venue: "VLDB Workshops",
        year: 2024,
        summary: "Retraining policies that keep learned indexes competitive under sustained inserts.",
        subtitle: "Keeping model-based indexes accurate as data drifts",
        body: "<p>We study retraining triggers for learned indexes and show that a \
               cheap drift signal halves tail latency under write-heavy workloads.</p>",
    },
    SeedResearch {
        slug: "cost-models-for-columnar-scans",
        title: "Cost Models for Columnar Scans on Modern SSDs",
        venue: "DaMoN",
        year: 2022,
        summary: "Revisiting scan cost estimates when random reads are nearly free.",
        subtitle: "What the optimizer gets wrong about NVMe",
        body: "<p>Classic cost models overcharge random I/O. We calibrate a simple \
               replacement against four SSD generations.</p>",
    },
];

pub const EXPERIENCES: &[SeedExperience] = &[
    SeedExperience {
        role: "Staff Software Engineer",
        organization: "Northwind Data",
        location: "Remote",
        started: "2021",
        ended: "Present",
        description: "<p>Lead for the storage engine team. Shipped tiered storage and cut \
                      p99 read latency by 40%.</p>",
    },
    SeedExperience {
        role: "Software Engineer",
        organization: "Lakeshore Analytics",
        location: "Toronto, Canada",
        started: "2016",
        ended: "2021",
        description: "<p>Built the ingestion pipeline and the query service behind the \
                      analytics product.</p>",
    },
];
