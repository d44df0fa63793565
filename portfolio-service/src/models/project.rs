use serde::{Deserialize, Serialize};

/// A portfolio project as stored in the document store.
///
/// Optional URLs serialize as `null` rather than being omitted, so stored
/// documents keep a uniform shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: String,
    pub featured: bool,
}

/// Sample projects inserted the first time the collection is observed empty.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Microservices Order System".to_string(),
            description: "Event-driven microservices with Spring Boot, Kafka, and Docker for resilient order processing.".to_string(),
            tech_stack: vec![
                "Java".to_string(),
                "Spring Boot".to_string(),
                "Kafka".to_string(),
                "Docker".to_string(),
                "MongoDB".to_string(),
            ],
            repo_url: Some("https://github.com/example/order-system".to_string()),
            live_url: None,
            image_url: "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?w=1200&auto=format&fit=crop&q=60".to_string(),
            featured: true,
        },
        Project {
            title: "Reactive Billing API".to_string(),
            description: "High-throughput reactive REST API using Spring WebFlux and R2DBC.".to_string(),
            tech_stack: vec![
                "Java".to_string(),
                "Spring WebFlux".to_string(),
                "PostgreSQL".to_string(),
                "R2DBC".to_string(),
                "JWT".to_string(),
            ],
            repo_url: Some("https://github.com/example/billing-api".to_string()),
            live_url: None,
            image_url: "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?w=1200&auto=format&fit=crop&q=60".to_string(),
            featured: true,
        },
        Project {
            title: "CI/CD Pipeline as Code".to_string(),
            description: "GitHub Actions pipeline with quality gates, containers, and blue/green deployment.".to_string(),
            tech_stack: vec![
                "Java".to_string(),
                "Maven".to_string(),
                "GitHub Actions".to_string(),
                "Docker".to_string(),
                "Kubernetes".to_string(),
            ],
            repo_url: Some("https://github.com/example/cicd-pipeline".to_string()),
            live_url: None,
            image_url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=1200&auto=format&fit=crop&q=60".to_string(),
            featured: false,
        },
    ]
}
