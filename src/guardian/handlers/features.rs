use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// A dashboard feature card
#[derive(ToSchema, Serialize, Debug, Clone, Copy)]
pub struct Feature {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

/// The product catalog the dashboard renders, served from here so clients
/// never hold their own copy
pub const CATALOG: &[Feature] = &[
    Feature {
        name: "Breach Monitoring Alerts",
        slug: "breach-monitoring",
        description:
            "Stay instantly informed about suspicious activities and data breach attempts.",
    },
    Feature {
        name: "AI Threat Scanner",
        slug: "ai-threat-scanner",
        description:
            "Real-time AI analysis of files, links, and scripts to detect sophisticated threats.",
    },
    Feature {
        name: "Cyber Hygiene Score",
        slug: "cyber-hygiene-score",
        description:
            "Assess the strength of your cybersecurity posture and receive actionable insights.",
    },
    Feature {
        name: "Attack Simulation",
        slug: "attack-simulation",
        description:
            "Simulate real-world cyberattacks to expose vulnerabilities and train your team.",
    },
    Feature {
        name: "Secure Password Vault",
        slug: "password-vault",
        description:
            "Safely store and manage strong passwords using military-grade encryption.",
    },
    Feature {
        name: "Location-Based Login Alerts",
        slug: "location-login-alerts",
        description: "Get alerted for unusual login attempts based on geolocation tracking.",
    },
    Feature {
        name: "Zero Trust Login System",
        slug: "zero-trust-login",
        description:
            "Adopt Zero Trust principles with continuous verification and session control.",
    },
    Feature {
        name: "Interactive Security Labs",
        slug: "security-labs",
        description:
            "Hands-on labs for secure coding, penetration testing, and red-team practice.",
    },
    Feature {
        name: "Malicious File & Link Analyzer",
        slug: "malicious-analyzer",
        description:
            "Instant analysis of links and files to identify malware and phishing threats.",
    },
    Feature {
        name: "Session & Device Management Dashboard",
        slug: "session-device-management",
        description:
            "Visualize and manage active sessions and connected devices in real-time.",
    },
];

#[utoipa::path(
    get,
    path = "/features",
    responses(
        (status = 200, description = "Feature catalog", body = [Feature], content_type = "application/json"),
    ),
    tag = "features"
)]
pub async fn features() -> Json<&'static [Feature]> {
    Json(CATALOG)
}
