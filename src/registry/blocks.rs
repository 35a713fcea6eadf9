//! Built-in multi-file blocks

use super::ArtifactDescriptor;

pub(super) static BLOCKS: &[ArtifactDescriptor] = &[
    ArtifactDescriptor {
        name: "accordion",
        display_name: "Accordion",
        description: "Stacked collapsible sections with shared open state",
        dependencies: &["lit"],
        files: &["accordion.ts", "accordion-item.ts", "slot.ts"],
    },
    ArtifactDescriptor {
        name: "auth-form",
        display_name: "Auth Form",
        description: "Sign-in and sign-up form with validation",
        dependencies: &["lit", "zod"],
        files: &["auth-form.ts", "fields.ts", "validation.ts"],
    },
    ArtifactDescriptor {
        name: "dashboard-shell",
        display_name: "Dashboard Shell",
        description: "Sidebar, top bar and content area layout",
        dependencies: &["lit"],
        files: &["dashboard-shell.ts", "sidebar.ts", "top-bar.ts", "nav-items.ts"],
    },
    ArtifactDescriptor {
        name: "footer",
        display_name: "Footer",
        description: "Site footer with link columns and legal line",
        dependencies: &["lit"],
        files: &["footer.ts", "link-column.ts"],
    },
    ArtifactDescriptor {
        name: "hero-section",
        display_name: "Hero Section",
        description: "Landing page headline with call to action",
        dependencies: &["lit"],
        files: &["hero-section.ts", "cta.ts", "styles.ts"],
    },
    ArtifactDescriptor {
        name: "pricing-table",
        display_name: "Pricing Table",
        description: "Plan comparison with monthly and yearly toggle",
        dependencies: &["lit"],
        files: &["pricing-table.ts", "plan-card.ts", "plans.ts"],
    },
];
