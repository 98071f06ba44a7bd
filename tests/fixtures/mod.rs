#![allow(dead_code)]

use serplens::models::CompetitorRecord;
use std::fs;
use std::path::{Path, PathBuf};

pub const KEYWORD: &str = "digital marketing services";

pub fn record(position: usize, domain: &str, title: &str, meta: &str) -> CompetitorRecord {
    CompetitorRecord::new(
        domain,
        &format!("https://{}/", domain),
        position,
        title,
        meta,
    )
}

/// Three real-looking competitors for "digital marketing services".
pub fn sample_competitors() -> Vec<CompetitorRecord> {
    vec![
        record(
            1,
            "hubspot.com",
            "Digital Marketing Services | HubSpot",
            "Grow your business with HubSpot's digital marketing services including SEO, content marketing, and social media management.",
        ),
        record(
            2,
            "webfx.com",
            "Digital Marketing Services - WebFX",
            "Drive more revenue with our award-winning digital marketing services. Get SEO, PPC, social media marketing & more.",
        ),
        record(
            3,
            "lyfemarketing.com",
            "Digital Marketing Services | Social Media & PPC Management",
            "Professional digital marketing services including social media marketing, PPC management, and SEO to grow your business online.",
        ),
    ]
}

pub const SAMPLE_JSON: &str = r#"{
    "keyword": "digital marketing services",
    "competitors": [
        {
            "domain": "hubspot.com",
            "url": "https://www.hubspot.com/digital-marketing-services",
            "title": "Digital Marketing Services | HubSpot",
            "meta_description": "Grow your business with HubSpot's digital marketing services."
        },
        {
            "domain": "webfx.com",
            "url": "https://www.webfx.com/digital-marketing-services/",
            "title": "Digital Marketing Services - WebFX"
        }
    ]
}"#;

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture file");
    path
}
