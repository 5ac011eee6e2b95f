//! Built-in course catalog

use crate::{Category, Course, COURSE_PRICE_ETH};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The shipped course list
pub fn builtin_courses() -> Vec<Course> {
    vec![
        Course {
            id: "python-ai".into(),
            title: "Python for AI".into(),
            description: "Master Python programming for AI and machine learning with hands-on projects.".into(),
            price: 0.0,
            video_url: "https://bafybeifpo7pkihxsjkiti6ykhysu7l7xnptyhxs3y3arseulmuwkru64p4.ipfs.flk-ipfs.xyz".into(),
            ipfs_link: "ipfs://bafybeifpo7pkihxsjkiti6ykhysu7l7xnptyhxs3y3arseulmuwkru64p4".into(),
            video_cid: "bafybeifpo7pkihxsjkiti6ykhysu7l7xnptyhxs3y3arseulmuwkru64p4".into(),
            is_paid: false,
            duration: "6 hours".into(),
            instructor: "Dr. James Wilson".into(),
            category: Category::Regular,
            icon: "PythonIcon".into(),
            topics: strings(&["AI", "Machine Learning", "Technology", "Programming"]),
            certificate_template: String::new(),
            sign_language: String::new(),
            subtitles: false,
            special_features: Vec::new(),
        },
        Course {
            id: "environmental-impact".into(),
            title: "Environmental Studies & Impact".into(),
            description: "Discover the critical relationship between human activities and environmental change.".into(),
            price: 0.0,
            video_url: "https://bafybeihik7ybnqm4kmn3xvejrn3pux4by6sqokot5iuxcbyxxzvcj3w7wu.ipfs.flk-ipfs.xyz".into(),
            ipfs_link: "ipfs://bafybeihik7ybnqm4kmn3xvejrn3pux4by6sqokot5iuxcbyxxzvcj3w7wu".into(),
            video_cid: "bafybeihik7ybnqm4kmn3xvejrn3pux4by6sqokot5iuxcbyxxzvcj3w7wu".into(),
            is_paid: false,
            duration: "5 hours".into(),
            instructor: "Dr. Emma Green".into(),
            category: Category::Regular,
            icon: "EnvironmentIcon".into(),
            topics: strings(&["Environmental Science", "Conservation", "Sustainability"]),
            certificate_template: String::new(),
            sign_language: String::new(),
            subtitles: false,
            special_features: Vec::new(),
        },
        Course {
            id: "ai-mastery".into(),
            title: "AI Mastery".into(),
            description: "Deep dive into artificial intelligence, machine learning, and neural networks.".into(),
            price: COURSE_PRICE_ETH,
            video_url: "https://bafybeih7gaeiriwekuz3r6faobza25mcstubuh4qynintyj72pakrtazzu.ipfs.flk-ipfs.xyz".into(),
            ipfs_link: "ipfs://bafybeih7gaeiriwekuz3r6faobza25mcstubuh4qynintyj72pakrtazzu".into(),
            video_cid: "bafybeih7gaeiriwekuz3r6faobza25mcstubuh4qynintyj72pakrtazzu".into(),
            is_paid: true,
            duration: "8 hours".into(),
            instructor: "Dr. Alan Zhang".into(),
            category: Category::Regular,
            icon: "AiIcon".into(),
            topics: strings(&["AI", "Machine Learning", "Technology", "Programming"]),
            certificate_template: "https://example.com/ai-certificate-template.png".into(),
            sign_language: String::new(),
            subtitles: false,
            special_features: Vec::new(),
        },
        Course {
            id: "exploring-history".into(),
            title: "Exploring World History".into(),
            description: "Journey through pivotal moments in world history, from ancient civilizations to modern times.".into(),
            price: COURSE_PRICE_ETH,
            video_url: "https://bafybeiff6vjow24sm4hyam34pdz5iy73cgms67ano7nt7gnkkgv54rlnkm.ipfs.flk-ipfs.xyz".into(),
            ipfs_link: "ipfs://bafybeiff6vjow24sm4hyam34pdz5iy73cgms67ano7nt7gnkkgv54rlnkm".into(),
            video_cid: "bafybeiff6vjow24sm4hyam34pdz5iy73cgms67ano7nt7gnkkgv54rlnkm".into(),
            is_paid: true,
            duration: "10 hours".into(),
            instructor: "Prof. Maria Rodriguez".into(),
            category: Category::Regular,
            icon: "HistoryIcon".into(),
            topics: strings(&["History", "Cultural Studies", "Global Issues"]),
            certificate_template: "https://example.com/history-certificate-template.png".into(),
            sign_language: String::new(),
            subtitles: false,
            special_features: Vec::new(),
        },
        Course {
            id: "ai-assistance".into(),
            title: "AI for Special Assistance".into(),
            description: "Learn how to leverage AI tools and technologies for accessibility and special assistance.".into(),
            price: 0.0,
            video_url: "https://bafybeiefp4pxt7tmtydkyh2tctz4pmn6m2rsnpmvrvtt7k4doj2crrca4m.ipfs.flk-ipfs.xyz".into(),
            ipfs_link: "ipfs://bafybeiefp4pxt7tmtydkyh2tctz4pmn6m2rsnpmvrvtt7k4doj2crrca4m".into(),
            video_cid: "bafybeiefp4pxt7tmtydkyh2tctz4pmn6m2rsnpmvrvtt7k4doj2crrca4m".into(),
            is_paid: false,
            duration: "6 hours".into(),
            instructor: "Emma Chen".into(),
            category: Category::Deaf,
            icon: "AccessibilityIcon".into(),
            topics: strings(&["Accessibility", "AI", "Technology", "Programming"]),
            certificate_template: String::new(),
            sign_language: "ASL".into(),
            subtitles: true,
            special_features: strings(&["Visual Demonstrations", "Interactive Exercises", "Closed Captions"]),
        },
        Course {
            id: "sign-language".into(),
            title: "Complete Sign Language Course".into(),
            description: "Comprehensive guide to American Sign Language (ASL) with interactive lessons.".into(),
            price: 0.0,
            video_url: "https://bafybeibjznhftx74luzcdd36zr5p4ampdezsfaxgwedm4gsqvuhsk7qzee.ipfs.flk-ipfs.xyz".into(),
            ipfs_link: "ipfs://bafybeibjznhftx74luzcdd36zr5p4ampdezsfaxgwedm4gsqvuhsk7qzee".into(),
            video_cid: "bafybeibjznhftx74luzcdd36zr5p4ampdezsfaxgwedm4gsqvuhsk7qzee".into(),
            is_paid: false,
            duration: "12 hours".into(),
            instructor: "Michael Thompson".into(),
            category: Category::Deaf,
            icon: "SignLanguageIcon".into(),
            topics: strings(&["Sign Language", "Deaf Culture", "Communication Skills"]),
            certificate_template: String::new(),
            sign_language: "ASL".into(),
            subtitles: true,
            special_features: strings(&["Practice Exercises", "Cultural Insights", "Visual Dictionary"]),
        },
    ]
}
