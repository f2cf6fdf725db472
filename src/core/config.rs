use crate::builders::patterns::PropSpec;

/// The generator model files that still carry the dead credits props.
///
/// Paths are relative to the working directory the tool is invoked from,
/// which is expected to be the web repository root. The list is fixed on
/// purpose: this is a one-shot cleanup over an enumerated set of files,
/// not a discovery-based code transformer. Order here is processing and
/// report order.
pub const TARGET_FILES: &[&str] = &[
    "components/ai-generator/models/ImageUpscalerGenerator.tsx",
    "components/ai-generator/models/ZImageLoraGenerator.tsx",
    "components/ai-generator/models/GptImage15Generator.tsx",
    "components/ai-generator/models/ZImageGenerator.tsx",
    "components/ai-generator/models/FluxSchnellGenerator.tsx",
    "components/ai-generator/models/Flux2ProGenerator.tsx",
    "components/ai-generator/models/SeedreamGenerator.tsx",
    "components/ai-generator/models/LofiPixelCharacterGenerator.tsx",
    "components/ai-generator/models/NanoBananaProGenerator.tsx",
    "components/ai-generator/models/ImageWatermarkRemoverGenerator.tsx",
];

/// The three attribute lines to delete from every target: the credit
/// count, the loading flag and the refresh callback, all read off the
/// shared `generator` object. Patterns apply in this order, each on the
/// content as modified by the ones before it.
pub const PATTERN_SPECS: &[PropSpec] = &[
    PropSpec {
        attribute: "credits",
        source: "generator",
        property: "credits",
    },
    PropSpec {
        attribute: "isCreditsLoading",
        source: "generator",
        property: "creditsLoading",
    },
    PropSpec {
        attribute: "onCreditsRefresh",
        source: "generator",
        property: "refreshCredits",
    },
];
