//! Static portfolio content in French and English

use super::locale::Localized;

/// Owner name, shown in the navigation bar and the hero
pub const OWNER_NAME: &str = "Matteo";

/// Recipient name sent with every contact message
pub const RECIPIENT_NAME: &str = "Matteo";

/// File name the CV is exported under
pub const CV_FILE_NAME: &str = "CV_Matteo_Floirat.pdf";

/// Document sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Sections reachable from the navigation bar
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Label in the navigation bar
    pub fn nav_label(self) -> Localized {
        match self {
            Section::Hero => Localized::same(OWNER_NAME),
            Section::About => Localized::new("About", "À propos"),
            Section::Experience => Localized::new("Experiences", "Expériences"),
            Section::Skills => Localized::new("Skills", "Compétences"),
            Section::Projects => Localized::new("Projects", "Projets"),
            Section::Contact => Localized::same("Contact"),
        }
    }

    /// Heading at the top of the section
    pub fn heading(self) -> Localized {
        match self {
            Section::Hero => Localized::same(OWNER_NAME),
            Section::About => Localized::new("About Me", "À propos de moi"),
            Section::Experience => {
                Localized::new("Professional Experience", "Expérience Professionnelle")
            }
            Section::Skills => Localized::new("Technologies & Tools", "Technologies & Outils"),
            Section::Projects => Localized::new("My Projects", "Mes Projets"),
            Section::Contact => Localized::new("Contact Me", "Contactez-moi"),
        }
    }

    /// Navigation shortcut (1-5), none for the hero
    pub fn nav_key(self) -> Option<char> {
        Section::NAV
            .iter()
            .position(|s| *s == self)
            .and_then(|idx| char::from_digit(idx as u32 + 1, 10))
    }

    /// Section bound to a navigation shortcut
    pub fn from_nav_key(key: char) -> Option<Section> {
        let idx = key.to_digit(10)?.checked_sub(1)? as usize;
        Section::NAV.get(idx).copied()
    }
}

pub const TAGLINE: Localized =
    Localized::new("Student @Oteria & @Murex", "Etudiant @Oteria & @Murex");

pub const CONTACT_ACTION: Localized = Localized::new("Contact Me", "Me Contacter");

pub const CV_ACTION: Localized = Localized::new("Download my CV", "Télécharger mon CV");

pub const ABOUT_TEXT: Localized = Localized::new(
    "Cybersecurity apprentice at Murex, passionate about offensive and defensive cybersecurity. \
     Experience in network architecture, security management, and automation.",
    "Étudiant en 4ème année d'un Master à Oteria et en alternance chez Murex, je dispose de \
     compétences en cybersécurité offensive et défensive.",
);

pub const ABOUT_HIGHLIGHTS: [&str; 6] = [
    "Sécurité Réseau",
    "SIEM & Threat Intelligence",
    "Automatisation & Scripting",
    "Pentest & Cryptographie",
    "Web3 Security et Veille Technologique",
    "Sécurité Windows",
];

/// One job in the experience section
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: Localized,
    pub period: Localized,
    pub bullets: &'static [Localized],
    pub url: &'static str,
}

pub const EXPERIENCES: [Experience; 3] = [
    Experience {
        title: Localized::new(
            "Murex – Cybersecurity Apprentice",
            "Murex – Alternant en cybersécurité",
        ),
        period: Localized::new("Since September 2024", "Depuis Septembre 2024"),
        bullets: &[
            Localized::new(
                "Network architecture and secure access management",
                "Gestion de l'architecture réseau et des accès sécurisés",
            ),
            Localized::new(
                "Security log monitoring and analysis (Sentinel, Umbrella)",
                "Surveillance et analyse des logs de sécurité (Sentinel, Umbrella)",
            ),
            Localized::new(
                "Firewall management (Palo Alto, security policies)",
                "Gestion des pare-feu (Palo Alto, stratégies de sécurité)",
            ),
            Localized::new(
                "Task automation with Python and PowerShell",
                "Automatisation de tâches avec Python et PowerShell",
            ),
            Localized::new(
                "Network anomaly investigation and management",
                "Investigation et gestion des anomalies réseau",
            ),
        ],
        url: "https://www.murex.com/",
    },
    Experience {
        title: Localized::new("Imerys – Intership IT Support", "Imerys – Stage Support IT"),
        period: Localized::new("September 2023 - August 2024", "Septembre 2023 - Août 2024"),
        bullets: &[
            Localized::new(
                "IT support and troubleshooting",
                "Support et résolution des problèmes IT",
            ),
            Localized::new(
                "Deployment and configuration of new machines and smartphones",
                "Déploiement et configuration des nouvelles machines et des téléphones portables",
            ),
            Localized::new("Management of the IT fleet", "Gestion du parc informatique"),
            Localized::new(
                "Application of security rules",
                "Application des règles de sécurité",
            ),
        ],
        url: "https://www.imerys.com/",
    },
    Experience {
        title: Localized::new(
            "MadeForMed – Intership Solution Architect",
            "MadeForMed – Stage Architecte Solutions",
        ),
        period: Localized::new("June 2023 - August 2023", "Juin 2023 - Août 2023"),
        bullets: &[
            Localized::new(
                "Implementation of a backup system and business continuity plan",
                "Mise en production d'un système de sauvegarde et plan de reprise d'activité",
            ),
            Localized::new(
                "Responsible for the technical architecture",
                "Responsable de l'architecture technique",
            ),
            Localized::new(
                "Installation of applications in the cloud",
                "Installation d'applications dans le cloud",
            ),
        ],
        url: "https://www.madeformed.com/",
    },
];

/// One technology category in the skills section
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: Localized,
    pub tools: Localized,
}

pub const SKILLS: [SkillGroup; 6] = [
    SkillGroup {
        title: Localized::new("Operating Systems", "Systèmes d'exploitation"),
        tools: Localized::new(
            "Linux (Kali, Debian), Windows Server",
            "Linux (Kali, Debian), Windows, Windows Server, MacOS",
        ),
    },
    SkillGroup {
        title: Localized::new("Network Security", "Sécurité Réseau"),
        tools: Localized::new(
            "Firewalls (Palo Alto, Umbrella DNS), IDS/IPS",
            "Firewalls (Palo Alto, Umbrella), IDS/IPS",
        ),
    },
    SkillGroup {
        title: Localized::same("Pentest & Forensic"),
        tools: Localized::new(
            "Metasploit, Volatility, Wireshark",
            "Metasploit, Volatility, Wireshark, Burp Suite",
        ),
    },
    SkillGroup {
        title: Localized::same("SIEM & Logs"),
        tools: Localized::same("Azure Sentinel, Splunk, Sysmon"),
    },
    SkillGroup {
        title: Localized::new("Development", "Développement"),
        tools: Localized::same("Python, Bash, PowerShell, C, JavaScript, TypeScript"),
    },
    SkillGroup {
        title: Localized::new("Automation", "Automatisation"),
        tools: Localized::same("Ansible, Docker, Terraform"),
    },
];

/// One card in the projects section
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: Localized,
    pub description: Localized,
    pub url: Option<&'static str>,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: Localized::new(
            "Cybersecurity Technology Watch",
            "Veille Technologique en Cybersécurité",
        ),
        description: Localized::new(
            "Development of an RSS feed aggregator to follow cybersecurity news",
            "Développement d'un agrégateur de flux RSS pour suivre l'actualité cyber",
        ),
        url: Some("https://github.com/mattft0/embassy-map"),
    },
    Project {
        title: Localized::same("Volinux"),
        description: Localized::new(
            "Python script to detect Linux kernel version and generate a Volatility profile",
            "Script Python pour détecter la version du noyau Linux et générer un profil Volatility",
        ),
        url: Some("https://github.com/mattft0/volinux"),
    },
    Project {
        title: Localized::same("HomeLab"),
        description: Localized::new(
            "HomeLab with Proxmox, pfSense, and a Windows Server",
            "HomeLab avec Proxmox, pfSense et un Windows Server, monitoring avec Wazuh",
        ),
        url: None,
    },
    Project {
        title: Localized::same("WebShield"),
        description: Localized::new(
            "Development of a browser extension to protect users from malicious websites",
            "Développement d'une extension de navigateur pour protéger les utilisateurs des sites web malveillants",
        ),
        url: Some("https://github.com/mattft0/webshield"),
    },
];

/// Social link listed under the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub target: &'static str,
    /// Key that copies the target to the clipboard
    pub copy_key: char,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "LinkedIn",
        target: "https://www.linkedin.com/in/floiratmatteo/",
        copy_key: 'i',
    },
    SocialLink {
        label: "GitHub",
        target: "https://github.com/mattft0",
        copy_key: 'g',
    },
    SocialLink {
        label: "Email",
        target: "matteofloirat112440@gmail.com",
        copy_key: 'm',
    },
];

/// Social link bound to a copy key
pub fn social_link_for_key(key: char) -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|link| link.copy_key == key)
}

pub const CONTACT_PROMPT: Localized = Localized::new(
    "Press c to write me a message",
    "Appuyez sur c pour m'écrire un message",
);

pub const NAME_LABEL: Localized = Localized::new("Name", "Nom");
pub const EMAIL_LABEL: Localized = Localized::same("Email");
pub const MESSAGE_LABEL: Localized = Localized::same("Message");
pub const SEND_LABEL: Localized = Localized::new("Send", "Envoyer");
pub const SENDING_LABEL: Localized = Localized::new("Sending...", "Envoi...");
pub const CANCEL_LABEL: Localized = Localized::new("Back", "Retour");

pub const NAME_REQUIRED: Localized = Localized::new(
    "Please fill out this field.",
    "Veuillez renseigner ce champ.",
);

pub const SEND_SUCCESS: Localized = Localized::new(
    "Message sent successfully!",
    "Message envoyé avec succès !",
);

pub const SEND_FAILURE: Localized = Localized::new(
    "An error occurred while sending the message. Please try again.",
    "Une erreur est survenue lors de l'envoi du message. Veuillez réessayer.",
);

pub const FOOTER: Localized = Localized::new(
    "© 2025 Matteo. All rights reserved.",
    "© 2025 Matteo. Tous droits réservés.",
);
