//! Target platform table
//!
//! One record per target platform. The record is the single source for
//! everything platform-specific: the form card (label, description, icon,
//! color) and the knowledge-base block of the system instruction.
//!
//! `TargetPlatform::config()` is an exhaustive match, so adding a variant
//! without a record does not compile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Downstream AI tool the generated prompt is optimized for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetPlatform {
    #[default]
    NanoBanana,
    AntigravityIde,
    ChatGpt,
    GoogleAiStudio,
    Lovable,
}

impl TargetPlatform {
    /// All platforms in display order
    pub const ALL: [TargetPlatform; 5] = [
        TargetPlatform::NanoBanana,
        TargetPlatform::AntigravityIde,
        TargetPlatform::ChatGpt,
        TargetPlatform::GoogleAiStudio,
        TargetPlatform::Lovable,
    ];

    /// Static record for this platform
    pub fn config(self) -> &'static PlatformConfig {
        match self {
            TargetPlatform::NanoBanana => &NANO_BANANA,
            TargetPlatform::AntigravityIde => &ANTIGRAVITY_IDE,
            TargetPlatform::ChatGpt => &CHATGPT,
            TargetPlatform::GoogleAiStudio => &GOOGLE_AI_STUDIO,
            TargetPlatform::Lovable => &LOVABLE,
        }
    }

    /// Display label, also the value sent to the model
    pub fn label(self) -> &'static str {
        self.config().label
    }

    /// Kebab-case identifier used on the command line
    pub fn slug(self) -> &'static str {
        self.config().slug
    }

    /// Next platform in display order (wraps)
    pub fn next(self) -> TargetPlatform {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous platform in display order (wraps)
    pub fn prev(self) -> TargetPlatform {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown platform name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown platform '{0}' (expected one of: nano-banana, antigravity-ide, chatgpt, google-ai-studio, lovable)")]
pub struct UnknownPlatform(pub String);

impl FromStr for TargetPlatform {
    type Err = UnknownPlatform;

    /// Accepts the slug or the display label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TargetPlatform::ALL
            .into_iter()
            .find(|p| {
                let cfg = p.config();
                cfg.slug.eq_ignore_ascii_case(wanted) || cfg.label.eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Static per-platform record
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PlatformConfig {
    pub id: TargetPlatform,
    /// Display label ("Nano Banana")
    pub label: &'static str,
    /// CLI identifier ("nano-banana")
    pub slug: &'static str,
    /// Card description shown in the form
    pub description: &'static str,
    /// Icon reference for the card
    pub icon: &'static str,
    /// Card color, `#rrggbb`
    pub color: &'static str,
    /// Knowledge-base alias shown next to the label
    #[serde(skip)]
    pub alias: &'static str,
    /// Knowledge-base focus line
    #[serde(skip)]
    pub focus: &'static str,
    /// Knowledge-base optimization techniques
    #[serde(skip)]
    pub optimization: &'static str,
}

impl PlatformConfig {
    /// Knowledge-base entry for the system instruction
    pub fn instruction_block(&self, position: usize) -> String {
        format!(
            "{}. **{}** ({}):\n   - Focus: {}\n   - Optimization: {}\n",
            position, self.label, self.alias, self.focus, self.optimization
        )
    }

    /// Card color as RGB components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

/// All records, in `TargetPlatform::ALL` order
pub static PLATFORMS: [&PlatformConfig; 5] = [
    &NANO_BANANA,
    &ANTIGRAVITY_IDE,
    &CHATGPT,
    &GOOGLE_AI_STUDIO,
    &LOVABLE,
];

static NANO_BANANA: PlatformConfig = PlatformConfig {
    id: TargetPlatform::NanoBanana,
    label: "Nano Banana",
    slug: "nano-banana",
    description: "Otimizado para velocidade e eficiência. Melhor para tarefas concisas de inferência rápida e prompts de geração de imagem.",
    icon: "zap",
    color: "#eab308",
    alias: "Gemini Flash / Image",
    focus: "Efficiency, strict constraints, and image generation.",
    optimization: "Explicit output format (JSON/Markdown), no chit-chat. For images, one dense visual description: subject, composition, lighting, camera/lens, art style, color palette.",
};

static ANTIGRAVITY_IDE: PlatformConfig = PlatformConfig {
    id: TargetPlatform::AntigravityIde,
    label: "Antigravity IDE",
    slug: "antigravity-ide",
    description: "Feito para IDEs com Agentes. Enfatiza padrões de engenharia sênior, contexto completo de arquivos e sem espaços reservados.",
    icon: "terminal",
    color: "#a855f7",
    alias: "Agentic/Cursor/Windsurf",
    focus: "Coding standards and completeness.",
    optimization: "MUST include \"Write the FULL file content, no placeholders like //rest of code\". Specify file structure, imports, and strict typing.",
};

static CHATGPT: PlatformConfig = PlatformConfig {
    id: TargetPlatform::ChatGpt,
    label: "ChatGPT",
    slug: "chatgpt",
    description: "Profundidade conversacional. Focado em passos de raciocínio (Chain of Thought) e explicações detalhadas.",
    icon: "message",
    color: "#10a37f",
    alias: "O1/4o",
    focus: "Reasoning and depth.",
    optimization: "Ask for \"Chain of Thought\", step-by-step logic, and edge-case handling.",
};

static GOOGLE_AI_STUDIO: PlatformConfig = PlatformConfig {
    id: TargetPlatform::GoogleAiStudio,
    label: "Google AI Studio",
    slug: "google-ai-studio",
    description: "Entrada estruturada. Separa instruções de sistema dos prompts do usuário, ideal para prototipagem de API.",
    icon: "box",
    color: "#3b82f6",
    alias: "Prototyping",
    focus: "Structure.",
    optimization: "Use \"System Instructions\" vs \"User Prompt\" separation in the text. Use delimiters (###) and Few-Shot examples if possible.",
};

static LOVABLE: PlatformConfig = PlatformConfig {
    id: TargetPlatform::Lovable,
    label: "Lovable",
    slug: "lovable",
    description: "Construtor de apps full-stack. Define stack React, Tailwind e Supabase, páginas, fluxos de usuário e modelo de dados para um app pronto para publicar.",
    icon: "heart",
    color: "#ec4899",
    alias: "Full-stack app builder",
    focus: "A complete, shippable web app from a single prompt.",
    optimization: "Name the stack: React + TypeScript, Tailwind CSS styling, shadcn/ui components, Lucide icons, Supabase for auth, database tables and storage. List pages, user flows, data model, responsive layout, and empty/loading states.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_platform_has_matching_record() {
        for platform in TargetPlatform::ALL {
            assert_eq!(platform.config().id, platform);
        }
    }

    #[test]
    fn test_table_order_matches_enum_order() {
        let ids: Vec<_> = PLATFORMS.iter().map(|p| p.id).collect();
        assert_eq!(ids, TargetPlatform::ALL.to_vec());
    }

    #[test]
    fn test_parse_by_slug_and_label() {
        for platform in TargetPlatform::ALL {
            assert_eq!(platform.slug().parse::<TargetPlatform>(), Ok(platform));
            assert_eq!(platform.label().parse::<TargetPlatform>(), Ok(platform));
        }
        assert_eq!("LOVABLE".parse::<TargetPlatform>(), Ok(TargetPlatform::Lovable));
        assert_eq!(
            "google ai studio".parse::<TargetPlatform>(),
            Ok(TargetPlatform::GoogleAiStudio)
        );
    }

    #[test]
    fn test_parse_unknown_platform() {
        let err = "midjourney".parse::<TargetPlatform>().unwrap_err();
        assert!(err.to_string().contains("midjourney"));
    }

    #[test]
    fn test_colors_are_valid_hex() {
        for cfg in PLATFORMS {
            assert!(cfg.rgb().is_some(), "bad color for {}", cfg.label);
        }
        assert_eq!(NANO_BANANA.rgb(), Some((0xea, 0xb3, 0x08)));
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(TargetPlatform::Lovable.next(), TargetPlatform::NanoBanana);
        assert_eq!(TargetPlatform::NanoBanana.prev(), TargetPlatform::Lovable);
        assert_eq!(TargetPlatform::ChatGpt.next(), TargetPlatform::GoogleAiStudio);
    }

    #[test]
    fn test_instruction_block_format() {
        let block = LOVABLE.instruction_block(5);
        assert!(block.starts_with("5. **Lovable**"));
        assert!(block.contains("Supabase"));
    }
}
