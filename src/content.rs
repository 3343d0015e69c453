//! Hand-authored page content.

use crate::charts::{BarChart, PieChart, PieSlice};
use crate::theme;
use crate::wordcloud::{WordCloud, WordCloudSettings};
use egui::Color32;

pub const PAGE_TITLE: &str = "Brad's Biography and Thesis Defense";
pub const BANNER_CAPTION: &str = "Cybersecurity and Privacy Concepts";
pub const THESIS_CAPTION: &str = "AI-Powered Cybersecurity Framework";

pub const BIOGRAPHY: &str = "Hello! I'm Brad, a US Navy veteran, avid AI researcher, and cybersecurity professional. \
I enjoy spending my free time as a beach bum and cherish moments with my family. \
I am currently pursuing a PhD in Artificial Intelligence at Capitol Technology University, with my defense planned for Winter 2025.";

pub const THESIS_SUMMARY: &str = "My PhD thesis is titled 'Leveraging Artificial Intelligence for Enhanced Cybersecurity Solutions: Challenges, Opportunities, and Future Directions.' \
The research focuses on integrating AI technologies into cybersecurity frameworks to predict vulnerabilities, identify threats in real time, and implement automated mitigation strategies.";

pub const THESIS_TOOL: &str = "The tool I developed as part of this research integrates data from CVE.org and Red Hat API for comprehensive vulnerability assessments, \
including predictive analysis, anomaly detection, and sandboxing capabilities. This tool is a cornerstone of my defense, showcasing its production-ready automation capabilities.";

pub const GOALS_INTRO: &str = "Here are my short-term and long-term goals:";

pub const GOALS: &str = "- Achieve a production-ready, fully automated vulnerability management program within one year.\n\
- Complete my PhD and secure a high-paying remote research role in AI and cybersecurity.\n\
- Develop AI models that redefine threat detection and response in cybersecurity.\n\
- Launch my home health aid business, Caring Hands Home Health Aid Services, in Orlando, FL in two years.\n\
- Maintain a balanced and healthy lifestyle while excelling professionally.";

pub const RESUME_INTRO: &str = "Here are some highlights of my professional and academic journey:";

pub const RESUME_POINTS: &str = "- **Core Competencies:** Information Security Standards, Project Management, Governance Risk Compliance (GRC), Vulnerability Management, and Artificial Intelligence.\n\
- **Professional Experience:**\n  \
  - Cybersecurity roles at various organizations.\n  \
  - Extensive experience in Vulnerability management, security assesments, engagements, IAM, IT audit, and compliance.\n\
- **Technical Skills:** Proficient in Python, CUDA, TensorFlow, VMware, and Linux Administration.\n\
- **Research Contributions:** Developing research papers on AI-driven cybersecurity solutions and presented findings at conferences.\n\
- **Leadership:** Over a decade of leadership experience, including service in the US Navy.";

pub const RESUME_KEYWORDS: &str = "Information Security Standards Project Management Governance Risk Compliance Vulnerability Management Artificial Intelligence Python CUDA TensorFlow VMware Linux Administration Leadership";

pub const CLOSING: &str =
    "If you'd like to learn more about my work or connect with me, feel free to reach out!";

pub const CONNECT_LINK: &str =
    "[Connect with me on LinkedIn](https://www.linkedin.com/in/bradolton/)";

pub fn career_timeline() -> BarChart {
    BarChart {
        title: "Brad's Career Timeline".to_owned(),
        bars: [
            ("Cybersecurity Professional", 10.0),
            ("US Navy Service", 10.0),
            ("PhD Research", 5.0),
            ("AI & Cybersecurity", 8.0),
        ]
        .into_iter()
        .map(|(label, years)| (label.to_owned(), years))
        .collect(),
        fill: Color32::WHITE,
        edge: Color32::BLACK,
        background: theme::TEAL,
    }
}

pub fn goals_distribution() -> PieChart {
    PieChart {
        title: "Goals Distribution".to_owned(),
        slices: [
            ("Vulnerability Management", 25.0, Color32::from_rgb(0x1a, 0xbc, 0x9c)),
            ("PhD Completion", 20.0, Color32::from_rgb(0x34, 0x98, 0xdb)),
            ("AI Models", 30.0, Color32::from_rgb(0x9b, 0x59, 0xb6)),
            ("Business Launch", 15.0, Color32::from_rgb(0xf3, 0x9c, 0x12)),
            ("Personal Growth", 10.0, Color32::from_rgb(0xe7, 0x4c, 0x3c)),
        ]
        .into_iter()
        .map(|(label, size, color)| PieSlice {
            label: label.to_owned(),
            size,
            color,
        })
        .collect(),
        start_angle_deg: 140.0,
        background: theme::TEAL,
    }
}

pub fn resume_word_cloud() -> WordCloud {
    let settings = WordCloudSettings {
        background: theme::TEAL,
        ..WordCloudSettings::default()
    };
    WordCloud::generate(RESUME_KEYWORDS, &settings)
}
