use super::types::ColorScheme;

pub static LIGHT_THEME: ColorScheme = ColorScheme {
    name: "light",

    primary: "#6366F1",
    secondary: "#8B5CF6",

    background: "#F8FAFC",
    surface: "#FFFFFF",
    card: "#FFFFFF",
    border: "#E2E8F0",

    text: "#0F172A",
    text_secondary: "#64748B",

    accent1: "#EC4899",
    accent2: "#F59E0B",
    accent3: "#10B981",
    accent4: "#3B82F6",
    accent5: "#14B8A6",

    error: "#EF4444",
    success: "#22C55E",
    warning: "#F59E0B",

    primary_gradient: ["#6366F1", "#8B5CF6", "#EC4899"],
    background_gradient: ["#F8FAFC", "#EEF2FF", "#F5F3FF"],
    accent_gradient: ["#3B82F6", "#14B8A6"],
};

pub static DARK_THEME: ColorScheme = ColorScheme {
    name: "dark",

    primary: "#818CF8",
    secondary: "#A78BFA",

    background: "#0F0F1A",
    surface: "#1A1A2E",
    card: "#16213E",
    border: "#2D2D44",

    text: "#F1F5F9",
    text_secondary: "#94A3B8",

    accent1: "#F472B6",
    accent2: "#FBBF24",
    accent3: "#34D399",
    accent4: "#60A5FA",
    accent5: "#2DD4BF",

    error: "#F87171",
    success: "#4ADE80",
    warning: "#FBBF24",

    primary_gradient: ["#818CF8", "#A78BFA", "#F472B6"],
    background_gradient: ["#0F0F1A", "#1A1A2E", "#16213E"],
    accent_gradient: ["#60A5FA", "#2DD4BF"],
};
