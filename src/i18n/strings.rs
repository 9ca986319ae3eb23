use crate::i18n::Language;

/// Number of service cards every bundle carries.
pub const SERVICE_COUNT: usize = 6;

/// One card in the services grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub desc: &'static str,
}

/// All localized user-facing copy for a language
///
/// Strings are stored raw and unescaped. The view escapes them when writing
/// markup.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Name of the language in itself (e.g., "Português")
    pub lang_name: &'static str,

    // ==================== Navigation ====================
    /// Label of the `#services` link in the header
    pub nav_services: &'static str,

    // ==================== Hero ====================
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,

    /// Label of the call-to-action opening a chat with the primary contact
    pub cta_primary: &'static str,

    /// Label of the call-to-action opening a chat with the secondary contact
    pub cta_secondary: &'static str,

    /// Accessible label of the hero info card
    pub hero_card_label: &'static str,

    /// Badge on the hero info card
    pub hero_badge: &'static str,

    /// One-line list of service areas on the hero info card
    pub hero_tagline: &'static str,

    /// Sentence under the tagline on the hero info card
    pub hero_note: &'static str,

    // ==================== Services ====================
    pub services_title: &'static str,

    /// Service cards in display order
    pub services: [ServiceItem; SERVICE_COUNT],

    // ==================== Footer ====================
    pub footer: &'static str,
}

impl LanguageStrings {
    /// Get the copy bundle for a language.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language {
            Language::En => &ENGLISH_STRINGS,
            Language::Pt => &PORTUGUESE_STRINGS,
            Language::Es => &SPANISH_STRINGS,
        }
    }

    /// Every translatable text field, paired with its field name.
    ///
    /// Service entries are reported as `services[i].title` / `services[i].desc`.
    pub fn fields(&self) -> Vec<(String, &'static str)> {
        let mut fields = vec![
            ("lang_name".to_string(), self.lang_name),
            ("nav_services".to_string(), self.nav_services),
            ("hero_title".to_string(), self.hero_title),
            ("hero_subtitle".to_string(), self.hero_subtitle),
            ("cta_primary".to_string(), self.cta_primary),
            ("cta_secondary".to_string(), self.cta_secondary),
            ("hero_card_label".to_string(), self.hero_card_label),
            ("hero_badge".to_string(), self.hero_badge),
            ("hero_tagline".to_string(), self.hero_tagline),
            ("hero_note".to_string(), self.hero_note),
            ("services_title".to_string(), self.services_title),
        ];
        for (i, service) in self.services.iter().enumerate() {
            fields.push((format!("services[{}].title", i), service.title));
            fields.push((format!("services[{}].desc", i), service.desc));
        }
        fields.push(("footer".to_string(), self.footer));
        fields
    }
}

// ==================== English Strings ====================

/// English language strings (default)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    lang_name: "English",
    nav_services: "Services",

    hero_title: "Consulting & Administrative Support",
    hero_subtitle: "Personalized online assistance for individuals. We help with document handling, \
digitalization, backoffice tasks, and clarifying insurance-related questions.",
    cta_primary: "Chat on WhatsApp (321)",
    cta_secondary: "Chat on WhatsApp (407)",
    hero_card_label: "Quick info",
    hero_badge: "Online",
    hero_tagline: "Documents • Backoffice • Consulting",
    hero_note: "Helping you with documentation & insurance-related questions",

    services_title: "Our Services",
    services: [
        ServiceItem {
            title: "Document Assistance",
            desc: "Help preparing, reviewing, and organizing your paperwork.",
        },
        ServiceItem {
            title: "Digitalization",
            desc: "We digitize and organize your documents for easier access.",
        },
        ServiceItem {
            title: "Backoffice Services",
            desc: "Support with administrative tasks and daily demands.",
        },
        ServiceItem {
            title: "Consulting",
            desc: "Guidance to streamline your processes and solve challenges.",
        },
        ServiceItem {
            title: "Insurance Support",
            desc: "We help clarify your insurance policy questions and guide next steps.",
        },
        ServiceItem {
            title: "Remote Assistance",
            desc: "Available online via WhatsApp, email, and calls.",
        },
    ],

    footer: "© EM SERVICES — All rights reserved.",
};

// ==================== Portuguese Strings ====================

/// Portuguese language strings
pub const PORTUGUESE_STRINGS: LanguageStrings = LanguageStrings {
    lang_name: "Português",
    nav_services: "Serviços",

    hero_title: "Consultoria & Apoio Administrativo",
    hero_subtitle: "Atendimento online personalizado para pessoas físicas. Ajudamos com documentação, \
digitalização, serviços de backoffice e dúvidas relacionadas a seguros.",
    cta_primary: "Falar no WhatsApp (321)",
    cta_secondary: "Falar no WhatsApp (407)",
    hero_card_label: "Informações rápidas",
    hero_badge: "Atendimento online",
    hero_tagline: "Documentos • Backoffice • Consultoria",
    hero_note: "Ajudando você com documentação e dúvidas sobre seguros",

    services_title: "Nossos Serviços",
    services: [
        ServiceItem {
            title: "Apoio com Documentos",
            desc: "Auxílio na preparação, revisão e organização da sua papelada.",
        },
        ServiceItem {
            title: "Digitalização",
            desc: "Transformamos seus documentos em versão digital organizada.",
        },
        ServiceItem {
            title: "Serviços de Backoffice",
            desc: "Suporte em tarefas administrativas e demandas do dia a dia.",
        },
        ServiceItem {
            title: "Consultoria",
            desc: "Orientação para otimizar processos e resolver problemas.",
        },
        ServiceItem {
            title: "Apoio em Seguros",
            desc: "Esclarecemos dúvidas sobre apólices e próximos passos.",
        },
        ServiceItem {
            title: "Atendimento Remoto",
            desc: "Disponível online por WhatsApp, e-mail e chamadas.",
        },
    ],

    footer: "© EM SERVICES — Todos os direitos reservados.",
};

// ==================== Spanish Strings ====================

/// Spanish language strings
pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    lang_name: "Español",
    nav_services: "Servicios",

    hero_title: "Consultoría & Apoyo Administrativo",
    hero_subtitle: "Asistencia en línea personalizada para personas. Ayudamos con documentación, \
digitalización, tareas de backoffice y dudas relacionadas con seguros.",
    cta_primary: "Hablar por WhatsApp (321)",
    cta_secondary: "Hablar por WhatsApp (407)",
    hero_card_label: "Información rápida",
    hero_badge: "En línea",
    hero_tagline: "Documentos • Backoffice • Consultoría",
    hero_note: "Ayudándote con documentación y dudas sobre seguros",

    services_title: "Nuestros Servicios",
    services: [
        ServiceItem {
            title: "Apoyo con Documentos",
            desc: "Ayuda en la preparación, revisión y organización de tus papeles.",
        },
        ServiceItem {
            title: "Digitalización",
            desc: "Digitalizamos y organizamos documentos para fácil acceso.",
        },
        ServiceItem {
            title: "Servicios de Backoffice",
            desc: "Soporte en tareas administrativas y demandas diarias.",
        },
        ServiceItem {
            title: "Consultoría",
            desc: "Orientación para optimizar procesos y resolver desafíos.",
        },
        ServiceItem {
            title: "Apoyo en Seguros",
            desc: "Aclaramos dudas sobre pólizas y próximos pasos.",
        },
        ServiceItem {
            title: "Atención Remota",
            desc: "Disponible en línea por WhatsApp, correo y llamadas.",
        },
    ],

    footer: "© EM SERVICES — Todos los derechos reservados.",
};
