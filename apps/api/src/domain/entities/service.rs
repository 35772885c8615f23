/// Which waitlist backend satisfies the persistence contract for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Hosted,
    File,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Hosted => "hosted",
            BackendKind::File => "file",
        }
    }

    /// Label reported by the health endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::Hosted => "Supabase",
            BackendKind::File => "File storage",
        }
    }
}

/// Services that are only available when their credentials are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalService {
    CloudStorage,
    Ai,
}

impl OptionalService {
    pub fn name(&self) -> &'static str {
        match self {
            OptionalService::CloudStorage => "Cloud storage",
            OptionalService::Ai => "AI",
        }
    }

    pub fn label(&self, configured: bool) -> &'static str {
        match (self, configured) {
            (_, false) => "Not configured",
            (OptionalService::CloudStorage, true) => "Supabase Storage",
            (OptionalService::Ai, true) => "OpenAI",
        }
    }

    pub fn not_configured_message(&self) -> &'static str {
        match self {
            OptionalService::CloudStorage => {
                "Cloud storage not configured. Set SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY"
            }
            OptionalService::Ai => "AI not configured. Set OPENAI_API_KEY environment variable.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(BackendKind::Hosted.label(), "Supabase");
        assert_eq!(BackendKind::File.label(), "File storage");
        assert_eq!(OptionalService::Ai.label(true), "OpenAI");
        assert_eq!(OptionalService::CloudStorage.label(true), "Supabase Storage");
        assert_eq!(OptionalService::CloudStorage.label(false), "Not configured");
    }
}
