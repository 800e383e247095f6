//! Seed content for the EcoChallenge catalog.
//!
//! Mirrors the launch curriculum: three lessons of three chapters each,
//! three challenges, the badge and reward catalogs, leaderboard standings,
//! and the starter community posts.

use chrono::{Duration, Utc};

use crate::catalog::{
    Badge, Catalog, Challenge, Chapter, CommunityPost, LeaderboardEntry, Lesson, Question, Reward,
};

/// Badge awarded when a profile completes its first lesson.
pub const FIRST_LESSON_BADGE_ID: &str = "1";

/// Badge awarded when a profile completes its first challenge.
pub const FIRST_CHALLENGE_BADGE_ID: &str = "5";

/// Build the full read-only catalog.
pub fn catalog() -> Catalog {
    Catalog::new(
        lessons(),
        badges(),
        challenges(),
        rewards(),
        leaderboard(),
        seed_posts(),
    )
}

fn question(prompt: &str, options: [&str; 4], correct_answer_index: usize) -> Question {
    Question {
        prompt: prompt.to_string(),
        options: options.map(String::from).to_vec(),
        correct_answer_index,
    }
}

fn chapter(id: &str, title: &str, content: &str, q: Question) -> Chapter {
    Chapter {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        question: q,
    }
}

fn lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "1".into(),
            title: "The Carbon Cycle and Climate Change".into(),
            description:
                "Understand how carbon moves through our planet and its impact on the global climate."
                    .into(),
            eco_points: 80,
            chapters: vec![
                chapter(
                    "1-1",
                    "What is the Carbon Cycle?",
                    "## The Planet's Breathing System\n\nThe carbon cycle is the process by which \
                     carbon atoms continuously travel from the atmosphere to the Earth and back. \
                     The total amount of carbon in the system never changes; only its location \
                     does.\n\n### Key Reservoirs\n*   **The Atmosphere:** carbon as CO2.\n*   \
                     **The Oceans:** absorb vast amounts of carbon from the air.\n*   **Land:** \
                     soil, plants, and animals. Rocks and fossil fuels are the largest reservoir \
                     of Earth's carbon.\n\nThis natural balance keeps the climate stable, and \
                     human activity is disrupting it.",
                    question(
                        "Which of the following is the largest reservoir of carbon on Earth?",
                        ["The atmosphere", "Oceans", "Forests", "Rocks and fossil fuels"],
                        3,
                    ),
                ),
                chapter(
                    "1-2",
                    "How Humans Are Disrupting the Cycle",
                    "## The Human Factor\n\nThe Industrial Revolution changed a balance that had \
                     held for most of human history.\n\n### Major Disruptions\n*   **Burning \
                     Fossil Fuels:** releases CO2 far faster than natural processes can absorb \
                     it.\n*   **Deforestation:** felled forests stop absorbing CO2 and release \
                     the carbon they stored.\n*   **Industrial Processes:** cement manufacturing \
                     and other industry add significant emissions.\n\nThis influx of atmospheric \
                     CO2 is the primary driver of modern climate change.",
                    question(
                        "What is the main way humans have disrupted the carbon cycle?",
                        [
                            "Planting more trees",
                            "Burning fossil fuels",
                            "Protecting oceans",
                            "Volcanic eruptions",
                        ],
                        1,
                    ),
                ),
                chapter(
                    "1-3",
                    "The Greenhouse Effect and Global Warming",
                    "## Earth's Climate Blanket\n\nThe greenhouse effect is a natural process: \
                     greenhouse gases absorb and re-radiate the Sun's energy, warming the \
                     surface.\n\n### The Problem\nRising CO2 concentrations make this blanket \
                     thicker, trapping more heat and gradually raising the planet's average \
                     temperature. The consequences include melting ice caps, rising sea levels, \
                     more extreme weather, and disrupted ecosystems.",
                    question(
                        "What is the direct consequence of an enhanced greenhouse effect?",
                        [
                            "Cooler global temperatures",
                            "A thinner atmosphere",
                            "Trapping more heat, leading to global warming",
                            "Increased oxygen levels",
                        ],
                        2,
                    ),
                ),
            ],
        },
        Lesson {
            id: "2".into(),
            title: "Renewable Energy Sources".into(),
            description: "Explore the clean and sustainable energy sources that power our future."
                .into(),
            eco_points: 90,
            chapters: vec![
                chapter(
                    "2-1",
                    "Harnessing the Sun: Solar Power",
                    "## The Power of Sunlight\n\nSolar power converts energy from the sun into \
                     thermal or electrical energy, and it is the most abundant renewable source \
                     on the planet.\n\n### How it Works\nPhotovoltaic (PV) panels are made of \
                     solar cells. Sunlight striking the cells creates an electric field across \
                     their layers, and the resulting electron flow is electricity -- clean power \
                     with no greenhouse gas emissions.",
                    question(
                        "What do Photovoltaic (PV) panels do?",
                        [
                            "Cool down buildings",
                            "Convert sunlight directly into electricity",
                            "Create wind",
                            "Store water",
                        ],
                        1,
                    ),
                ),
                chapter(
                    "2-2",
                    "The Force of Nature: Wind Power",
                    "## Riding the Wind\n\nWind power uses wind turbines to turn electric \
                     generators. Wind is a clean fuel source that does not pollute the air.\n\n\
                     ### Wind Turbines\nThe wind pushes against a turbine's blades, spinning a \
                     shaft connected to a generator. Wind farms are built in reliably windy \
                     places such as hilltops and offshore waters.",
                    question(
                        "How do wind turbines generate electricity?",
                        [
                            "By burning natural gas",
                            "Through a chemical reaction",
                            "By using the wind to spin blades connected to a generator",
                            "By using solar panels",
                        ],
                        2,
                    ),
                ),
                chapter(
                    "2-3",
                    "Water and Heat: Hydropower and Geothermal",
                    "## Earth's Inner and Outer Power\n\n**Hydropower** uses the flow of moving \
                     water from rivers or dams to spin turbines. It is reliable and low-cost, \
                     though large dams carry environmental and social impacts.\n\n**Geothermal \
                     energy** taps the Earth's internal heat: water or steam piped from deep \
                     underground drives turbines at the surface. Powerful and consistent, but \
                     only available at geological hotspots.",
                    question(
                        "What does geothermal energy use to generate electricity?",
                        [
                            "The flow of rivers",
                            "The heat from within the Earth",
                            "The movement of the tides",
                            "Sunlight",
                        ],
                        1,
                    ),
                ),
            ],
        },
        Lesson {
            id: "3".into(),
            title: "Simple Steps for a Greener Lifestyle".into(),
            description:
                "Learn easy, everyday actions you can take to make a positive impact on the environment."
                    .into(),
            eco_points: 75,
            chapters: vec![
                chapter(
                    "3-1",
                    "The 3 R's: Reduce, Reuse, Recycle",
                    "## The Foundation of Eco-Friendly Living\n\nThe three R's are prioritized in \
                     order.\n\n### 1. Reduce\nConsume less and generate less waste in the first \
                     place: refuse plastic bags, buy less packaging, switch off idle \
                     electronics.\n\n### 2. Reuse\nBefore throwing something away, ask whether \
                     it can serve again: refillable bottles, donated clothes, jars as \
                     storage.\n\n### 3. Recycle\nConvert waste materials into new objects -- \
                     paper, cardboard, plastic bottles, and metal cans in most areas.",
                    question(
                        "Which of the \"3 R's\" is the most important for reducing our environmental impact?",
                        ["Recycle", "Reuse", "Reduce", "All are equally important"],
                        2,
                    ),
                ),
                chapter(
                    "3-2",
                    "Conserving Water and Energy at Home",
                    "## Small Changes, Big Savings\n\n### Saving Water\nTurn off the tap while \
                     brushing, take shorter showers, and fix leaky faucets promptly -- a single \
                     drip wastes gallons per day.\n\n### Saving Energy\nSwitch to LED bulbs, and \
                     unplug chargers and appliances when idle: many devices draw 'phantom' power \
                     even when turned off.",
                    question(
                        "What is \"phantom power\"?",
                        [
                            "Energy from ghosts",
                            "The power used by devices that are plugged in but turned off",
                            "The power from solar panels at night",
                            "A type of renewable energy",
                        ],
                        1,
                    ),
                ),
                chapter(
                    "3-3",
                    "Making Eco-Friendly Choices",
                    "## You Have the Power\n\nEvery consumer choice has an impact.\n\n### Think \
                     Before You Buy\n*   **Support Sustainable Brands:** transparent supply \
                     chains and eco-friendly materials.\n*   **Eat Local:** shorter transport \
                     means lower carbon emissions.\n*   **Choose Reusable over Disposable:** \
                     cloth napkins, shopping bags, rechargeable batteries.",
                    question(
                        "Why is buying local food often a more eco-friendly choice?",
                        [
                            "It is always cheaper",
                            "It tastes better",
                            "It reduces carbon emissions from transportation",
                            "It uses more packaging",
                        ],
                        2,
                    ),
                ),
            ],
        },
    ]
}

fn badges() -> Vec<Badge> {
    let badge = |id: &str, name: &str, description: &str, icon: &str| Badge {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
    };
    vec![
        badge("1", "Seedling Starter", "Completed your first lesson!", "sprout"),
        badge("2", "Waste Warrior", "Mastered the waste segregation lesson.", "recycle"),
        badge("3", "Compost Champion", "Became an expert in composting.", "leaf"),
        badge("4", "Aqua Saver", "Aced the water conservation quiz.", "droplets"),
        badge("5", "First Challenge", "Completed your first real-world challenge.", "star"),
        badge("6", "Green Thumb", "Planted a tree.", "tree-pine"),
    ]
}

fn challenges() -> Vec<Challenge> {
    let challenge = |id: &str, title: &str, description: &str, eco_points, n: u32| Challenge {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        eco_points,
        image_url: format!("https://picsum.photos/400/250?random={n}"),
    };
    vec![
        challenge(
            "1",
            "Plant a Sapling",
            "Plant a native tree in your community or backyard. Submit a geo-tagged photo of \
             you with the newly planted sapling.",
            150,
            5,
        ),
        challenge(
            "2",
            "DIY Compost Bin",
            "Create your own compost bin from recycled materials. Submit a photo of your bin \
             and the first layer of compost.",
            120,
            6,
        ),
        challenge(
            "3",
            "Zero-Waste Week",
            "Try to produce as little waste as possible for one week. Submit a photo of your \
             weekly trash (or lack thereof!).",
            200,
            7,
        ),
    ]
}

fn rewards() -> Vec<Reward> {
    let reward = |id: &str, name: &str, description: &str, cost, icon: &str| Reward {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        cost,
        icon: icon.into(),
    };
    vec![
        reward(
            "1",
            "Plantable Seed Pencils",
            "A set of pencils that grow into herbs when planted after use.",
            150,
            "pencil",
        ),
        reward(
            "2",
            "Reusable Steel Bottle",
            "An insulated stainless-steel water bottle with the EcoChallenge logo.",
            300,
            "glass-water",
        ),
        reward(
            "3",
            "Canvas Tote Bag",
            "A sturdy organic-cotton tote to replace single-use plastic bags.",
            200,
            "shopping-bag",
        ),
        reward(
            "4",
            "Tree Planted in Your Name",
            "We plant a native sapling in a reforestation project, dedicated to you.",
            500,
            "tree-pine",
        ),
    ]
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    let entry = |rank, team: &str, school: &str, points, n: u32| LeaderboardEntry {
        rank,
        team: team.into(),
        school: school.into(),
        points,
        avatar_url: format!("https://picsum.photos/40/40?random={n}"),
    };
    vec![
        entry(1, "Green Warriors", "Oakridge International", 12500, 1),
        entry(2, "Eco Avengers", "Maplewood High", 11800, 2),
        entry(3, "Planet Protectors", "Riverdale School", 11250, 3),
        entry(4, "Nature Ninjas", "Hilltop Academy", 10500, 4),
        entry(5, "Earth Heroes", "Sunshine Public School", 9800, 5),
        entry(6, "Recycle Rangers", "Banyan Tree School", 9200, 6),
    ]
}

fn seed_posts() -> Vec<CommunityPost> {
    let now = Utc::now();
    let post = |id: &str, author: &str, title: &str, content: &str, days_ago: i64, n: u32| {
        CommunityPost {
            id: id.into(),
            author: author.into(),
            author_avatar_url: format!("https://picsum.photos/40/40?random={n}"),
            title: title.into(),
            content: content.into(),
            created_at: now - Duration::days(days_ago),
            likes: 0,
        }
    };
    vec![
        post(
            "1",
            "Priya Sharma",
            "Idea: Community Garden Project",
            "I think we should start a community garden in the unused plot behind the library. \
             We can grow our own organic vegetables and share them. We can use compost from our \
             own homes to fertilize the soil, reducing waste and promoting healthy eating.",
            2,
            7,
        ),
        post(
            "2",
            "Rohan Verma",
            "Rainwater Harvesting in our School",
            "Our school has a huge rooftop. We could install a rainwater harvesting system to \
             collect water during the monsoon for cleaning, watering the school garden, and \
             flushing toilets. It would save a lot of freshwater and reduce our water bills.",
            5,
            8,
        ),
        post(
            "3",
            "Anika Reddy",
            "Upcycling old clothes drive",
            "Let's organize a drive to collect old clothes. Instead of throwing them away, we \
             can teach students how to upcycle them into useful items like bags, rugs, or \
             decorative pieces, and sell the finished products to fund other eco-projects.",
            7,
            9,
        ),
    ]
}
