use crate::components::alerts::Alert;
use crate::components::campus_map::CampusMap;
use crate::components::cursor::CursorFollower;
use crate::components::diagram::Whiteboard;
use crate::components::energy_chart::EnergyChart;
use crate::components::live_clock::LiveClock;
use crate::components::navbar::Navbar;
use crate::components::process::ProcessSteps;
use crate::components::reveal::Reveal;
use crate::components::roi_calculator::RoiCalculator;
use crate::components::scroll_link::ScrollLink;
use crate::components::stats::StatCounter;
use crate::components::timeline::Timeline;
use crate::components::use_page_config;
use crate::utils::{document, visibility};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

const PROBLEMS: [(&str, &str, &str); 3] = [
    ("🔥", "AC left running", "Classrooms and offices are cooled for hours after everyone has left."),
    ("📉", "No visibility", "Facilities teams see one monthly bill instead of per-building usage."),
    ("🛠️", "Reactive maintenance", "Units are repaired after they fail, usually at peak demand."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_page_config();
    let ready = use_state(|| false);

    // Show everything first, then start the timed initialisers
    {
        let ready = ready.clone();
        let delay = config.init_delay_ms;
        use_effect_with_deps(
            move |_| {
                log::info!("Smart Campus Platform Initializing...");
                match document().and_then(|d| visibility::force_visible(&d)) {
                    Ok(touched) => log::debug!("Forced {} elements visible", touched),
                    Err(e) => log::error!("Failed to force content visible: {}", e),
                }
                let timeout = Timeout::new(delay, move || {
                    ready.set(true);
                    log::info!("All components initialized successfully!");
                });
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <CursorFollower />
            <Navbar />

            <header class="hero">
                <div class="hero-content">
                    <h1>{"Stop paying to cool empty buildings"}</h1>
                    <p>
                        {config.product_name.clone()}
                        {" watches every AC unit on campus and switches off the waste automatically."}
                    </p>
                    <div class="hero-buttons">
                        <ScrollLink href="#calculator" class={classes!("btn", "btn-primary")}>{"Calculate savings"}</ScrollLink>
                        <ScrollLink href="#dashboard" class={classes!("btn", "btn-secondary")}>{"See the dashboard"}</ScrollLink>
                    </div>
                    <div class="stats-counter">
                        <StatCounter count="40" suffix="%" label="energy saved" running={*ready} />
                        <StatCounter count="240" label="buildings monitored" running={*ready} />
                        <StatCounter count="67" suffix="%" label="fewer breakdowns" running={*ready} />
                    </div>
                </div>
            </header>

            <section id="problem" class="section">
                <h2 class="section-title">{"Where campus energy goes"}</h2>
                <div class="problem-grid">
                    {
                        PROBLEMS.iter().map(|(icon, title, body)| html! {
                            <Reveal key={*title} class={classes!("problem-card")}>
                                <div class="problem-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="dashboard" class="section">
                <h2 class="section-title">{"One live view of the whole campus"}</h2>
                <Reveal class={classes!("dashboard-container")}>
                    <div class="dashboard-header">
                        <span>{"Campus load"}</span>
                        <LiveClock />
                    </div>
                    <div class="dashboard-body">
                        <Whiteboard />
                        <CampusMap ready={*ready} />
                    </div>
                </Reveal>
                <Reveal class={classes!("alert-container")}>
                    <Alert level="warning" message="Gymnasium is running at 90% load." />
                    <Alert level="info" message="Dorm A cooling schedule adjusted for the weekend." />
                    <Alert level="success" message="Library saved 120 kWh since this morning." />
                </Reveal>
            </section>

            <section id="process" class="section">
                <h2 class="section-title">{"How it works"}</h2>
                <ProcessSteps />
            </section>

            <section id="impact" class="section">
                <h2 class="section-title">{"A typical weekday"}</h2>
                <EnergyChart ready={*ready} />
            </section>

            <section id="roi" class="section">
                <h2 class="section-title">{"What would your campus save?"}</h2>
                <RoiCalculator />
            </section>

            <section id="timeline" class="section">
                <h2 class="section-title">{"From audit to savings"}</h2>
                <Timeline />
            </section>

            <footer class="footer">
                <p>{format!("© {}", config.product_name)}</p>
                <ScrollLink href="#">{"Back to top"}</ScrollLink>
            </footer>
        </div>
    }
}
