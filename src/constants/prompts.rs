pub const MIN_WORDS_PER_SECTION: usize = 300;
pub const MIN_WORDS_SUMMARY: usize = 100;

pub const SYSTEM_PROMPT: &str = "Du är Ulrika Davidsson från Functional Foods Sweden, expert på functional foods och hälsa. Du skriver långa, detaljerade och personliga hälsoråd på svenska. Svara ENDAST med ett giltigt JSON-objekt utan extra text, kommentarer eller markdown-formatering.";

pub const PERSONA_INTRO: &str = "Du är Ulrika Davidsson, grundare av Functional Foods Sweden och expert på functional foods och hälsa.

Baserat på följande quizresultat ska du ge personliga, konkreta och engagerande rekommendationer. Skriv ALLTID i \"du\"-form direkt till användaren.";

pub const FORMATTING_RULES: &str = "FORMATERING:
- Använd <h3> för rubriken i varje sektion
- Använd <p> för stycken och <strong> för fetstil, aldrig markdown som **
- Skriv flytande text i logiska stycken, inte punktlistor
- Ge konkreta exempel, doseringar, tider och praktiska tips";

pub const SCORING_RULES: &str = "POÄNG: Sätt ett heltal 1-10 för varje kategori i \"scores\" baserat på svaren:
- energi: energinivå och trötthet
- sömn: sömnkvalitet
- stress: stressnivå, lägre stress ger högre poäng
- kost: matvanor
- motion: aktivitetsnivå";

pub struct Course {
    pub name: &'static str,
    pub weeks: u8,
    pub price: &'static str,
    pub recipes: u16,
    pub focus: &'static str,
    pub suited_for: &'static str,
}

pub const COURSES: &[Course] = &[
    Course {
        name: "FUNCTIONAL BASICS",
        weeks: 6,
        price: "2295 kr",
        recipes: 75,
        focus: "Baskurs inom functional foods med fokus på immunförsvar, energi och allmän hälsa. Recept och måltidsplan, råvaruguide, näringslära, videolektioner och coachning.",
        suited_for: "stabilt blodsocker, mer energi, bättre humör, starkare immunförsvar, hormonell balans",
    },
    Course {
        name: "FUNCTIONAL FLOW",
        weeks: 6,
        price: "ordinarie 2295 kr, nu 1836 kr",
        recipes: 85,
        focus: "Maghälsa och antiinflammatorisk kost, recept anpassade för tarmfloran. Förbättrad matsmältning, balanserad tarmflora och mindre uppblåsthet.",
        suited_for: "orolig eller uppblåst mage, trötthet, inflammation",
    },
];

/// Example skeleton of the expected answer. Placeholders describe each field.
pub const SCHEMA_EXAMPLE: &str = r#"{
  "scores": {
    "energi": <1-10>,
    "sömn": <1-10>,
    "stress": <1-10>,
    "kost": <1-10>,
    "motion": <1-10>
  },
  "summary": "<h3>Din Hälsosammanfattning</h3><p>Börja med 'Baserat på dina svar ser jag att du...' och analysera hur dina hälsoområden påverkar varandra.</p>",
  "kostrad": "<h3>Dina Personliga Kostråd</h3><p>Livsmedel att äta mer av, måltidsförslag för frukost, lunch och middag, mellanmål.</p>",
  "livsstil": "<h3>Din Livsstilsplan</h3><p>Sömnrutiner med tider, morgon- och kvällsrutiner, träning och stresshantering.</p>",
  "functionalFoods": "<h3>Dina Functional Foods</h3><p>Tillskott med dosering, när de ska tas och varför.</p>",
  "prioriteringar": "<h3>Din Prioriteringsplan</h3><p>En plan uppdelad på veckor och månader med förväntade resultat.</p>",
  "dinKurs": "<h3>Din Rekommenderade Kurs</h3><p>Vilken av kurserna som passar bäst och varför.</p>"
}"#;
