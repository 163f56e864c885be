use yew::prelude::*;

use crate::navigation::Section;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    description: &'static str,
    image: &'static str,
    linkedin: &'static str,
    github: &'static str,
    email: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Nicolás Díaz",
        role: "Diseñador UI · UX y Frontend",
        description: "Diseño y experiencia de usuario",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=faces",
        linkedin: "#",
        github: "#",
        email: "nicolas@pampacode.com",
    },
    TeamMember {
        name: "Efren Accolto",
        role: "Diseñador UX · UX y Frontend",
        description: "Gestión de proyectos y relación con clientes",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=faces",
        linkedin: "#",
        github: "#",
        email: "efren@pampacode.com",
    },
    TeamMember {
        name: "Benjamin Sosa",
        role: "Desarrollador backend",
        description: "Infraestructura y Servicios",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop&crop=faces",
        linkedin: "#",
        github: "#",
        email: "benjamin@pampacode.com",
    },
];

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <section id={Section::Equipo.anchor()} class="team">
            <style>
                {r#"
                .team {
                    padding: 5rem 1.5rem;
                    background: var(--muted);
                }
                .team-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--card);
                    color: var(--card-foreground);
                    box-shadow: 0 4px 20px rgba(21, 101, 192, 0.1);
                }
                .team-photo {
                    width: 12rem;
                    height: 14rem;
                    margin-bottom: 1.5rem;
                    border-radius: 0.75rem;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .team-card:hover .team-photo {
                    transform: scale(1.05);
                }
                .team-card h3 {
                    margin: 0 0 0.25rem 0;
                    font-size: 1.1rem;
                }
                .team-role {
                    margin: 0 0 0.5rem 0;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--primary);
                }
                .team-description {
                    margin: 0 0 1.5rem 0;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                    text-align: center;
                }
                .team-links {
                    display: flex;
                    gap: 1rem;
                }
                .team-links a {
                    padding: 0.5rem 0.7rem;
                    border-radius: 0.5rem;
                    background: var(--primary-soft);
                    color: var(--primary);
                    font-size: 0.8rem;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .team-links a:hover {
                    background: var(--primary);
                    color: var(--primary-foreground);
                }
                "#}
            </style>
            <div class="section-header">
                <h2>{Section::Equipo.title()}</h2>
                <p>{"Talento experto dedicado a construir el futuro digital."}</p>
            </div>
            <div class="card-grid">
                { for TEAM.iter().map(|member| html! {
                    <article class="team-card" key={member.email}>
                        <img
                            class="team-photo"
                            src={member.image}
                            alt={format!("Foto de {}", member.name)}
                            loading="lazy"
                        />
                        <h3>{member.name}</h3>
                        <p class="team-role">{member.role}</p>
                        <p class="team-description">{member.description}</p>
                        <div class="team-links">
                            <a href={member.linkedin} target="_blank" rel="noopener noreferrer"
                                aria-label={format!("LinkedIn de {}", member.name)}>{"in"}</a>
                            <a href={member.github} target="_blank" rel="noopener noreferrer"
                                aria-label={format!("GitHub de {}", member.name)}>{"gh"}</a>
                            <a href={format!("mailto:{}", member.email)}
                                aria-label={format!("Email de {}", member.name)}>{"✉"}</a>
                        </div>
                    </article>
                })}
            </div>
        </section>
    }
}
