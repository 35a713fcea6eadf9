//! Built-in single-file components

use super::ArtifactDescriptor;

pub(super) static COMPONENTS: &[ArtifactDescriptor] = &[
    ArtifactDescriptor {
        name: "accordion-item",
        display_name: "Accordion Item",
        description: "Single collapsible section with a header trigger",
        dependencies: &["lit"],
        files: &["accordion-item.ts"],
    },
    ArtifactDescriptor {
        name: "alert",
        display_name: "Alert",
        description: "Callout for status messages with icon and title slots",
        dependencies: &["lit", "class-variance-authority"],
        files: &["alert.ts"],
    },
    ArtifactDescriptor {
        name: "avatar",
        display_name: "Avatar",
        description: "User image with initials fallback",
        dependencies: &["lit"],
        files: &["avatar.ts"],
    },
    ArtifactDescriptor {
        name: "badge",
        display_name: "Badge",
        description: "Small status label",
        dependencies: &["lit", "class-variance-authority"],
        files: &["badge.ts"],
    },
    ArtifactDescriptor {
        name: "button",
        display_name: "Button",
        description: "Clickable action with variants and sizes",
        dependencies: &["lit", "class-variance-authority"],
        files: &["button.ts"],
    },
    ArtifactDescriptor {
        name: "calendar",
        display_name: "Calendar",
        description: "Month grid date picker",
        dependencies: &["lit", "date-fns"],
        files: &["calendar.ts"],
    },
    ArtifactDescriptor {
        name: "card",
        display_name: "Card",
        description: "Surface container with header, content and footer slots",
        dependencies: &["lit"],
        files: &["card.ts"],
    },
    ArtifactDescriptor {
        name: "checkbox",
        display_name: "Checkbox",
        description: "Tri-state checkbox bound to a form field",
        dependencies: &["lit"],
        files: &["checkbox.ts"],
    },
    ArtifactDescriptor {
        name: "dialog",
        display_name: "Dialog",
        description: "Modal window with focus trap",
        dependencies: &["lit", "@floating-ui/dom"],
        files: &["dialog.ts"],
    },
    ArtifactDescriptor {
        name: "dropdown-menu",
        display_name: "Dropdown Menu",
        description: "Menu anchored to a trigger element",
        dependencies: &["lit", "@floating-ui/dom"],
        files: &["dropdown-menu.ts"],
    },
    ArtifactDescriptor {
        name: "input",
        display_name: "Input",
        description: "Text field with label and error state",
        dependencies: &["lit"],
        files: &["input.ts"],
    },
    ArtifactDescriptor {
        name: "label",
        display_name: "Label",
        description: "Accessible form label",
        dependencies: &["lit"],
        files: &["label.ts"],
    },
    ArtifactDescriptor {
        name: "popover",
        display_name: "Popover",
        description: "Floating panel anchored to a trigger",
        dependencies: &["lit", "@floating-ui/dom"],
        files: &["popover.ts"],
    },
    ArtifactDescriptor {
        name: "progress",
        display_name: "Progress",
        description: "Determinate and indeterminate progress bar",
        dependencies: &["lit"],
        files: &["progress.ts"],
    },
    ArtifactDescriptor {
        name: "radio-group",
        display_name: "Radio Group",
        description: "Exclusive choice between options",
        dependencies: &["lit"],
        files: &["radio-group.ts"],
    },
    ArtifactDescriptor {
        name: "select",
        display_name: "Select",
        description: "Single value picker with keyboard navigation",
        dependencies: &["lit", "@floating-ui/dom"],
        files: &["select.ts"],
    },
    ArtifactDescriptor {
        name: "separator",
        display_name: "Separator",
        description: "Horizontal or vertical divider",
        dependencies: &["lit"],
        files: &["separator.ts"],
    },
    ArtifactDescriptor {
        name: "skeleton",
        display_name: "Skeleton",
        description: "Loading placeholder",
        dependencies: &["lit"],
        files: &["skeleton.ts"],
    },
    ArtifactDescriptor {
        name: "slider",
        display_name: "Slider",
        description: "Range input with one or two thumbs",
        dependencies: &["lit"],
        files: &["slider.ts"],
    },
    ArtifactDescriptor {
        name: "switch",
        display_name: "Switch",
        description: "Binary on/off toggle",
        dependencies: &["lit"],
        files: &["switch.ts"],
    },
    ArtifactDescriptor {
        name: "table",
        display_name: "Table",
        description: "Data table primitives",
        dependencies: &["lit"],
        files: &["table.ts"],
    },
    ArtifactDescriptor {
        name: "tabs",
        display_name: "Tabs",
        description: "Tabbed views sharing one panel area",
        dependencies: &["lit"],
        files: &["tabs.ts"],
    },
    ArtifactDescriptor {
        name: "textarea",
        display_name: "Textarea",
        description: "Multi-line text field",
        dependencies: &["lit"],
        files: &["textarea.ts"],
    },
    ArtifactDescriptor {
        name: "toast",
        display_name: "Toast",
        description: "Transient notification queue",
        dependencies: &["lit"],
        files: &["toast.ts"],
    },
    ArtifactDescriptor {
        name: "tooltip",
        display_name: "Tooltip",
        description: "Hover and focus hint",
        dependencies: &["lit", "@floating-ui/dom"],
        files: &["tooltip.ts"],
    },
];
