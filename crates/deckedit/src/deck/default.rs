use super::{Presentation, Slide, SlideId, SlideKind};

fn slide(id: SlideId, title: &str, kind: SlideKind, content: &[&str]) -> Slide {
    Slide {
        id,
        title: title.to_string(),
        content: content.iter().map(|line| line.to_string()).collect(),
        kind,
    }
}

/// The deck a session starts with when no document is opened.
pub fn default_presentation() -> Presentation {
    Presentation {
        title: "Workflow Automation".to_string(),
        subtitle: "Interactive Training Session".to_string(),
        slides: vec![
            slide(
                1,
                "Workflow Automation",
                SlideKind::Title,
                &[
                    "Building reliable integrations without the glue code",
                    "Platform team onboarding",
                    "Questions during the session are welcome",
                    "Slides: https://docs.example.com/training/automation",
                ],
            ),
            slide(
                2,
                "Agenda",
                SlideKind::Agenda,
                &[
                    "Why automate",
                    "Core concepts: triggers, nodes, connections",
                    "Building a first workflow",
                    "Error handling and retries",
                    "Deploying and monitoring",
                    "Q&A",
                ],
            ),
            slide(
                3,
                "Core Concepts",
                SlideKind::Content,
                &[
                    "Triggers",
                    "  • Start a workflow from a schedule, a webhook or an event",
                    "  • One trigger per workflow",
                    "",
                    "Nodes",
                    "  1. Each node does exactly one thing",
                    "  2. Output of one node is input of the next",
                    "    ◦ Items flow as JSON arrays",
                    "    • Expressions read earlier outputs",
                    "",
                    "Reference: https://api.example.com/v1/reference",
                ],
            ),
            slide(
                4,
                "A First Workflow",
                SlideKind::Content,
                &[
                    "Webhook to chat notification",
                    "  • Receive the payload",
                    "  • Transform it",
                    "    { \"text\": \"Deploy finished\", \"channel\": \"#releases\" }",
                    "  • Post it to the team channel",
                    "",
                    "Example repository: https://github.com/example/workflow-samples",
                ],
            ),
            slide(
                5,
                "Operations",
                SlideKind::Content,
                &[
                    "Monitoring",
                    "  • Failed executions page the on-call rotation",
                    "  • Alert routing: alerts@ops.example.com",
                    "",
                    "Runbooks",
                    "  • See https://wiki.example.com/automation/runbooks",
                ],
            ),
            slide(
                6,
                "Questions?",
                SlideKind::Qa,
                &[
                    "Thank you!",
                    "---",
                    "Get in touch",
                    "team@example.com",
                    "support@example.com",
                    "https://wiki.example.com/automation",
                ],
            ),
        ],
    }
}
