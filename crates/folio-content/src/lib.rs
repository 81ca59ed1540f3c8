//! Built-in portfolio content.
//!
//! Everything the page displays that is not chrome: the person's profile,
//! skills, work history, projects, education and contact details.

/// A named group of skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// One position in the work history.
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Source repository URL.
    pub repository: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub field: &'static str,
    /// Grade, or "Pursuing".
    pub status: &'static str,
    pub institution: &'static str,
}

/// Contact details and social profiles.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// The whole portfolio.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    /// Short role line shown above the name.
    pub role: &'static str,
    /// One-sentence pitch under the typewriter line.
    pub blurb: &'static str,
    /// Phrases cycled by the typewriter.
    pub phrases: &'static [&'static str],
    pub about: &'static [&'static str],
    pub skills: &'static [SkillGroup],
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub education: &'static [Education],
    pub contact: Contact,
    /// Invitation shown in the contact section.
    pub contact_pitch: &'static str,
    pub footer: &'static str,
}

impl Profile {
    /// Initials of the name, used as the navigation brand.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The built-in profile.
pub fn profile() -> &'static Profile {
    &PROFILE
}

static PROFILE: Profile = Profile {
    name: "Sharon K Varghese",
    role: "Python Full-Stack Developer",
    blurb: "Building scalable, responsive, production-ready web applications with Django, \
            ReactJs / Angular, and modern tech stacks",
    phrases: &[
        "Full-Stack Developer | Python - Django / Flask | Angular / ReactJs",
        "Python Full-Stack Developer",
        "Software Engineer Trainee",
    ],
    about: &[
        "Results-driven Python Full-Stack Developer with hands-on experience building scalable, \
         responsive, and production-ready web applications using Django, React, Angular, REST \
         APIs, and modern databases.",
        "Strong focus on performance, clean architecture, and user-focused design. Experienced \
         in mentoring interns and delivering real-world production features.",
    ],
    skills: &[
        SkillGroup {
            name: "Frontend",
            skills: &["React.js", "Angular", "HTML5", "CSS3", "JavaScript", "Bootstrap"],
        },
        SkillGroup {
            name: "Backend",
            skills: &["Python", "Django", "Flask", "REST APIs"],
        },
        SkillGroup {
            name: "Database",
            skills: &["MySQL", "MongoDB", "SQLite"],
        },
        SkillGroup {
            name: "Tools",
            skills: &["Git", "Docker", "Firebase", "GenAI", "Genkit"],
        },
    ],
    experience: &[
        Experience {
            title: "Software Engineer Trainee",
            company: "Quest Innovative Solutions, Cochin",
            period: "June 2024 - Dec 2025",
            points: &[
                "Full-stack development using Django, React, Angular, and MySQL",
                "Responsive UI development following modern UX standards",
                "Backend-frontend integration for seamless workflows",
                "Mentoring interns in Python and web development",
                "Git-based team collaboration",
            ],
        },
        Experience {
            title: "Python Full-Stack Developer Intern",
            company: "Quest Innovative Solutions, Cochin",
            period: "Mar 2024 - June 2024",
            points: &[
                "Student Management System with authentication and CRUD operations",
                "Mobile-friendly Bootstrap-based interfaces",
                "JavaScript 8×8 chessboard implementation",
                "Python Tkinter applications",
                "SQL query and schema optimization",
            ],
        },
        Experience {
            title: "Fire Alarm Technician",
            company: "Naffco Electro Mechanical Co. (LLC), Abu Dhabi, U.A.E",
            period: "June 2023 - Feb 2024",
            points: &[
                "Performed maintenance and servicing of fire alarm systems",
                "Maintained central battery systems to ensure operational reliability",
                "Conducted servicing of FM200 and foam-based fire suppression systems",
            ],
        },
    ],
    projects: &[
        Project {
            title: "Air Quality Monitoring System",
            description: "Real-time air quality monitoring application with data visualization \
                          and alerting capabilities",
            tech: &["Python", "Django", "React.Js", "REST API", "MySQL", "Cryptography"],
            repository: "https://github.com/sh46on/Air-Monitoring-Dashboard",
        },
        Project {
            title: "Smart Hiking - AI Powered Application",
            description: "AI-powered hiking companion featuring route optimization, weather \
                          prediction, and safety recommendations",
            tech: &["Python", "Django", "GenAI", "Copilot", "OpenWeather", "Daphne", "Docker"],
            repository: "https://github.com/sh46on/Smart-AI-Hiking",
        },
        Project {
            title: "HemoFlow+ - Blood Donation System",
            description: "Comprehensive blood donation management platform connecting donors \
                          with recipients efficiently",
            tech: &["Django", "MySQL", "Javascript", "Bootstrap", "OpenStreetMap"],
            repository: "https://github.com/sh46on/HemoflowPlus",
        },
        Project {
            title: "E-Voting System",
            description: "Secure electronic voting platform with blockchain-inspired \
                          verification and real-time result tracking",
            tech: &[
                "Python",
                "Django",
                "Sqlite3",
                "Tensorflow",
                "Javascript",
                "dlib",
                "WeasyPrint",
                "Cmake",
                "GTK3",
            ],
            repository: "https://github.com/sh46on/E-Voting",
        },
        Project {
            title: "Reverse-OLX",
            description: "A Reverse OLX platform where buyers post their requirements and \
                          sellers respond with offers. Unlike traditional OLX-style listings, \
                          this app flips the flow",
            tech: &["Angular", "Django", "Sqlite3", "daphne", "Django-Rest-Framework"],
            repository: "https://github.com/sh46on/Reverse-OLX",
        },
    ],
    education: &[
        Education {
            degree: "Bachelor of Commerce",
            field: "Finance & Taxation",
            status: "Pursuing",
            institution: "Tandem College - Cochin, Mahatma Gandhi University",
        },
        Education {
            degree: "Diploma",
            field: "Industrial Electrical Engineering",
            status: "90%",
            institution: "Little Flower Engineering Institute, Kalamassery",
        },
        Education {
            degree: "Plus Two",
            field: "Commerce with Computer Application",
            status: "60%",
            institution: "Our Lady Of Mercy Higher Secondary School, Aroor",
        },
        Education {
            degree: "SSLC",
            field: "Kerala State Board",
            status: "72%",
            institution: "Sacred Heart Higher Secondary School, Thevara",
        },
    ],
    contact: Contact {
        email: "sharonvarghese935@gmail.com",
        location: "Ernakulam, Kerala",
        github: "https://github.com/sh46on",
        linkedin: "https://www.linkedin.com/in/sharon-varghese-38ba58325/",
    },
    contact_pitch: "Open to opportunities in Software Engineering, Full-Stack Development, \
                    and innovative product teams.",
    footer: "© 2026 Sharon K Varghese. Crafted with precision and passion.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(profile().initials(), "SKV");
    }

    #[test]
    fn test_repositories_are_https() {
        for project in profile().projects {
            assert!(project.repository.starts_with("https://github.com/"));
        }
    }

    #[test]
    fn test_phrases_present() {
        assert!(!profile().phrases.is_empty());
        assert!(profile().phrases.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(
            profile().contact.mailto(),
            "mailto:sharonvarghese935@gmail.com"
        );
    }
}
