//! Exercise library - accessory movements grouped by archetype

/// Primary movement pattern of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    VerticalPull,
    VerticalPush,
    HorizontalPull,
    HorizontalPush,
    Squat,
    Hinge,
    Misc,
}

impl Archetype {
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::VerticalPull => "Vertical Pull",
            Archetype::VerticalPush => "Vertical Push",
            Archetype::HorizontalPull => "Horizontal Pull",
            Archetype::HorizontalPush => "Horizontal Push",
            Archetype::Squat => "Squat",
            Archetype::Hinge => "Hinge",
            Archetype::Misc => "Misc",
        }
    }

    /// All archetypes in display order
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::VerticalPull,
            Archetype::VerticalPush,
            Archetype::HorizontalPull,
            Archetype::HorizontalPush,
            Archetype::Squat,
            Archetype::Hinge,
            Archetype::Misc,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Exercise {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub primary_archetype: Archetype,
}

impl Exercise {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

const fn ex(
    name: &'static str,
    tags: &'static [&'static str],
    primary_archetype: Archetype,
) -> Exercise {
    Exercise { name, tags, primary_archetype }
}

pub const EXERCISES: &[Exercise] = &[
    // Upper Body Push - Horizontal
    ex("DB incline press", &["Horizontal Push"], Archetype::HorizontalPush),
    ex("Push-ups", &["Horizontal Push"], Archetype::HorizontalPush),
    ex("Close-grip bench press", &["Horizontal Push"], Archetype::HorizontalPush),

    // Upper Body Push - Vertical
    ex("Landmine press", &["Vertical Push", "Vertical Press"], Archetype::VerticalPush),
    ex("Dumbbell Z-press", &["Vertical Push", "Vertical Press"], Archetype::VerticalPush),
    ex("Seated DB overhead press", &["Vertical Push", "Vertical Press"], Archetype::VerticalPush),
    ex("Kettlebell press", &["Vertical Push", "Vertical Press"], Archetype::VerticalPush),

    // Upper Body Push - Isolation
    ex("Lateral Raises", &["Isolation / Hypertrophy", "Vertical Press"], Archetype::VerticalPush),
    ex("Triceps pushdowns", &["Isolation / Hypertrophy"], Archetype::Misc),
    ex("Dips", &["Isolation / Hypertrophy", "Vertical Push"], Archetype::VerticalPush),

    // Upper Body Pull - Horizontal
    ex("Barbell row", &["Horizontal Pull", "Horizontal Row"], Archetype::HorizontalPull),
    ex("DB row", &["Horizontal Pull", "Horizontal Row"], Archetype::HorizontalPull),
    ex("Gorilla Rows", &["Horizontal Pull", "Horizontal Row"], Archetype::HorizontalPull),
    ex(
        "Seated cable row",
        &["Horizontal Pull", "Horizontal Row", "Row (supported)"],
        Archetype::HorizontalPull,
    ),

    // Upper Body Pull - Vertical
    ex("Pull-ups", &["Vertical Pull"], Archetype::VerticalPull),
    ex("Chin-ups", &["Vertical Pull"], Archetype::VerticalPull),
    ex("Lat pulldowns", &["Vertical Pull"], Archetype::VerticalPull),

    // Upper Body Pull - Upper Back
    ex("Face pulls", &["Upper-Back / Rear Delt / Scapular Stability"], Archetype::HorizontalPull),
    ex(
        "Band pull-aparts",
        &["Upper-Back / Rear Delt / Scapular Stability"],
        Archetype::HorizontalPull,
    ),
    ex("Rear-delt fly", &["Upper-Back / Rear Delt / Scapular Stability"], Archetype::Misc),
    ex("Shrugs", &["Upper-Back / Rear Delt / Scapular Stability"], Archetype::Misc),

    // Lower Body - Unilateral Quad Dominant
    ex("ATG Split Squats", &["Squat Pattern", "Quad Dominant", "Unilateral"], Archetype::Squat),
    ex(
        "Bulgarian split squats",
        &["Squat Pattern", "Quad Dominant", "Unilateral"],
        Archetype::Squat,
    ),
    ex("Goblet split squat", &["Squat Pattern", "Quad Dominant", "Unilateral"], Archetype::Squat),
    ex("Poliquin Stepdowns", &["Squat Pattern", "Quad Dominant", "Unilateral"], Archetype::Squat),

    // Lower Body - Unilateral Hip Dominant
    ex(
        "Single-Leg RDL",
        &["Hinge Pattern", "Glute / Hip-Dominant", "Unilateral"],
        Archetype::Hinge,
    ),
    ex(
        "Cossack Squats",
        &["Squat Pattern", "Glute / Hip-Dominant", "Unilateral"],
        Archetype::Squat,
    ),

    // Lower Body - Bilateral Quad
    ex("Leg press", &["Squat Pattern", "Quad Dominant"], Archetype::Squat),

    // Lower Body - Bilateral Hip/Hamstring
    ex("RDL", &["Hinge Pattern", "Glutes / Hamstrings"], Archetype::Hinge),
    ex("Hip thrusts", &["Hinge Pattern", "Glutes / Hamstrings"], Archetype::Hinge),
    ex("Glute bridges", &["Hinge Pattern", "Glutes / Hamstrings"], Archetype::Hinge),
    ex(
        "Back extensions",
        &["Hinge Pattern", "Glutes / Hamstrings", "Hinge Integration", "Secondary Hinge (low-back friendly)"],
        Archetype::Hinge,
    ),
    ex("Hamstring curls", &["Glutes / Hamstrings"], Archetype::Hinge),

    // Core - Anti-Extension
    ex(
        "Planks",
        &["Core (Anti-extension)", "Core", "Anti-Extension / Anti-Flexion"],
        Archetype::Misc,
    ),
    ex(
        "Leg Raises",
        &["Core (Anti-extension)", "Core", "Anti-Extension / Anti-Flexion"],
        Archetype::Misc,
    ),
    ex(
        "Ab-wheel rollouts",
        &["Core (Anti-extension)", "Core", "Anti-Extension / Anti-Flexion"],
        Archetype::Misc,
    ),

    // Core - Anti-Rotation
    ex(
        "Pallof Press",
        &["Core (Anti-rotation)", "Core", "Anti-Rotation / Anti-Lateral Flexion"],
        Archetype::Misc,
    ),
    ex(
        "Side Planks",
        &["Core (Anti-rotation)", "Core", "Anti-Rotation / Anti-Lateral Flexion"],
        Archetype::Misc,
    ),
    ex(
        "Suitcase Carries",
        &["Core (Anti-rotation)", "Core", "Anti-Rotation / Anti-Lateral Flexion"],
        Archetype::Misc,
    ),
    ex(
        "Farmer Carries",
        &["Core (Anti-rotation)", "Core", "Anti-Rotation / Anti-Lateral Flexion"],
        Archetype::Misc,
    ),

    // Core - Hinge Integration
    ex(
        "Reverse hypers",
        &["Hinge Integration", "Secondary Hinge (low-back friendly)"],
        Archetype::Hinge,
    ),
    ex(
        "Hip extensions with pause",
        &["Hinge Integration", "Secondary Hinge (low-back friendly)"],
        Archetype::Hinge,
    ),
    ex(
        "Seated Good Mornings",
        &["Hinge Integration", "Secondary Hinge (low-back friendly)"],
        Archetype::Hinge,
    ),
];

pub fn find_exercise(name: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.name == name)
}

/// Exercises carrying a tag, in table order
pub fn exercises_by_tag(tag: &str) -> Vec<&'static Exercise> {
    EXERCISES.iter().filter(|e| e.has_tag(tag)).collect()
}

/// Exercises grouped by primary archetype.
///
/// Every archetype is listed, in `Archetype::all()` order, even if empty.
pub fn exercises_by_primary_archetype() -> Vec<(Archetype, Vec<&'static Exercise>)> {
    Archetype::all()
        .iter()
        .map(|archetype| {
            let group = EXERCISES
                .iter()
                .filter(|e| e.primary_archetype == *archetype)
                .collect();
            (*archetype, group)
        })
        .collect()
}

/// Unique tags across the library, sorted
pub fn all_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = EXERCISES.iter().flat_map(|e| e.tags.iter().copied()).collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}
