// Fixed patch constants, grouped so the patchers can be driven with
// synthetic inputs in tests.

use std::path::PathBuf;

/// Client sources that issue `fetch` calls against the edge functions
pub const DEFAULT_APIKEY_TARGETS: [&str; 3] = [
    "src/hooks/features/community/useCommunityPosts.ts",
    "src/hooks/features/community/useCommunityPost.ts",
    "src/services/features/ai/UnifiedAIAssessmentService.ts",
];

/// Canonical CORS block written into every edge function
pub const CANONICAL_CORS_BLOCK: &str = "const corsHeaders = {
  'Access-Control-Allow-Origin': '*',
  'Access-Control-Allow-Headers': 'authorization, x-client-info, apikey, content-type, x-requested-with',
  'Access-Control-Allow-Methods': 'POST, GET, OPTIONS, PUT, DELETE',
  'Access-Control-Max-Age': '86400',
};";

/// Settings for the API-key header injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyConfig {
    /// Files to patch, relative to the project root
    pub targets: Vec<PathBuf>,
    /// Header name to inject
    pub header_key: String,
    /// Header expected in primary blocks before the content type
    pub auth_key: String,
    /// Content type header present in every candidate block
    pub content_type_key: String,
    /// Environment variable referenced by the injected value
    pub env_var: String,
    /// Substring marking files that use Vite-style `import.meta.env`
    pub vite_marker: String,
    /// Indentation of the injected entry
    pub entry_indent: String,
    /// Indentation of the re-emitted closing brace
    pub closing_indent: String,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            targets: DEFAULT_APIKEY_TARGETS.iter().map(PathBuf::from).collect(),
            header_key: "apikey".to_string(),
            auth_key: "Authorization".to_string(),
            content_type_key: "Content-Type".to_string(),
            env_var: "VITE_SUPABASE_ANON_KEY".to_string(),
            vite_marker: "import.meta.env".to_string(),
            entry_indent: " ".repeat(10),
            closing_indent: " ".repeat(8),
        }
    }
}

/// Settings for the CORS block replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Directory holding one subdirectory per edge function
    pub functions_dir: PathBuf,
    /// Entry file looked up in each function directory
    pub entry_file: String,
    /// Name of the constant being replaced
    pub const_name: String,
    /// Replacement text for the whole declaration
    pub block: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            functions_dir: PathBuf::from("supabase/functions"),
            entry_file: "index.ts".to_string(),
            const_name: "corsHeaders".to_string(),
            block: CANONICAL_CORS_BLOCK.to_string(),
        }
    }
}
