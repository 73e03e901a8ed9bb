use crate::models::domain::{QuizOption, QuizQuestion};

/// The fixed, ordered question set. Ids are 1-based and are the keys of `quizData`.
pub static QUESTION_BANK: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        topic: "energinivå",
        question: "Hur skulle du beskriva din nuvarande energinivå?",
        subtitle: "Vi vill förstå hur du känner dig under en typisk dag",
        options: &[
            QuizOption {
                value: "high_energy",
                label: "Hög energi genom hela dagen",
                description: "Jag känner mig pigg och alert från morgon till kväll",
            },
            QuizOption {
                value: "afternoon_dip",
                label: "Bra energi men trötthet på eftermiddagen",
                description: "Jag börjar bra men får ofta en energidipp runt lunch",
            },
            QuizOption {
                value: "variable_energy",
                label: "Varierande energi under dagen",
                description: "Vissa dagar är bra, andra känns tunga",
            },
            QuizOption {
                value: "low_energy",
                label: "Låg energi och konstant trötthet",
                description: "Jag känner mig trött och utmattad det mesta av tiden",
            },
        ],
    },
    QuizQuestion {
        id: 2,
        topic: "sömn",
        question: "Hur ser din typiska sömn ut?",
        subtitle: "Sömnkvalitet påverkar allt från energi till immunförsvar",
        options: &[
            QuizOption {
                value: "excellent_sleep",
                label: "Utmärkt sömn (7-9 timmar, vaknar utvilad)",
                description: "Jag somnar lätt och vaknar pigg på morgonen",
            },
            QuizOption {
                value: "good_sleep",
                label: "Bra sömn men vaknar ibland under natten",
                description: "Generellt bra men inte alltid djup sömn",
            },
            QuizOption {
                value: "disrupted_sleep",
                label: "Svårt att somna eller vaknar ofta",
                description: "Det tar tid att somna eller jag vaknar flera gånger",
            },
            QuizOption {
                value: "poor_sleep",
                label: "Dålig sömn (för lite eller dålig kvalitet)",
                description: "Jag sover för kort eller vaknar inte utvilad",
            },
        ],
    },
    QuizQuestion {
        id: 3,
        topic: "stress",
        question: "Hur hanterar du stress i vardagen?",
        subtitle: "Stress påverkar både fysisk och mental hälsa",
        options: &[
            QuizOption {
                value: "low_stress",
                label: "Hanterar stress mycket bra",
                description: "Jag har bra strategier och känner mig sällan överväldigad",
            },
            QuizOption {
                value: "moderate_stress",
                label: "Måttlig stress, klarar det mesta",
                description: "Ibland stressig men hittar balans",
            },
            QuizOption {
                value: "high_stress",
                label: "Ofta stressad och överväldigad",
                description: "Känner press från jobb, familj eller andra åtaganden",
            },
            QuizOption {
                value: "chronic_stress",
                label: "Konstant stress och ångest",
                description: "Jag känner mig nästan alltid stressad eller orolig",
            },
        ],
    },
    QuizQuestion {
        id: 4,
        topic: "motion",
        question: "Hur ofta tränar du per vecka?",
        subtitle: "Motion är grundläggande för hälsa och välmående",
        options: &[
            QuizOption {
                value: "very_active",
                label: "5+ gånger per vecka",
                description: "Motion är en viktig del av min vardag",
            },
            QuizOption {
                value: "active",
                label: "3-4 gånger per vecka",
                description: "Jag tränar regelbundet men inte varje dag",
            },
            QuizOption {
                value: "somewhat_active",
                label: "1-2 gånger per vecka",
                description: "Jag tränar ibland men skulle vilja göra det mer",
            },
            QuizOption {
                value: "sedentary",
                label: "Sällan eller aldrig",
                description: "Jag får för lite motion i min vardag",
            },
        ],
    },
    QuizQuestion {
        id: 5,
        topic: "kost",
        question: "Hur ser dina matvanor ut?",
        subtitle: "Kosten är grunden för all hälsa och energi",
        options: &[
            QuizOption {
                value: "excellent_diet",
                label: "Mycket hälsosam och balanserad kost",
                description: "Jag äter varierat med mycket grönsaker, protein och fullkorn",
            },
            QuizOption {
                value: "good_diet",
                label: "Ganska hälsosam men kan förbättras",
                description: "Jag försöker äta hälsosamt men lyckas inte alltid",
            },
            QuizOption {
                value: "mixed_diet",
                label: "Blandat - vissa måltider hälsosamma",
                description: "Vissa dagar bra, andra mer snabbmat och socker",
            },
            QuizOption {
                value: "poor_diet",
                label: "Ohälsosam kost med mycket processad mat",
                description: "Jag äter ofta snabbmat, socker och processade produkter",
            },
        ],
    },
    QuizQuestion {
        id: 6,
        topic: "matsmältning",
        question: "Hur är din mage och matsmältning?",
        subtitle: "Tarmhälsan är central för immunförsvar och välmående",
        options: &[
            QuizOption {
                value: "excellent_digestion",
                label: "Utmärkt - inga problem",
                description: "Min mage mår bra och jag har regelbunden matsmältning",
            },
            QuizOption {
                value: "occasional_issues",
                label: "Mest bra med tillfälliga problem",
                description: "Ibland uppblåst eller obekväm efter vissa måltider",
            },
            QuizOption {
                value: "frequent_issues",
                label: "Regelbundna magproblem",
                description: "Ofta uppblåst, gaser eller oregelbunden matsmältning",
            },
            QuizOption {
                value: "chronic_issues",
                label: "Konstanta besvär",
                description: "Dagliga problem med magen",
            },
        ],
    },
    QuizQuestion {
        id: 7,
        topic: "immunförsvar",
        question: "Hur ofta blir du sjuk (förkylning, influensa)?",
        subtitle: "Immunförsvaret speglar din allmänna hälsostatus",
        options: &[
            QuizOption {
                value: "strong_immunity",
                label: "Sällan eller aldrig sjuk",
                description: "Jag har stark immunitet och blir knappt sjuk",
            },
            QuizOption {
                value: "normal_immunity",
                label: "1-2 gånger per år",
                description: "Normalt immunförsvar, blir sjuk ibland",
            },
            QuizOption {
                value: "frequent_illness",
                label: "3-4 gånger per år",
                description: "Blir sjuk ganska ofta, särskilt på vintern",
            },
            QuizOption {
                value: "weak_immunity",
                label: "Mycket ofta sjuk",
                description: "Jag verkar fånga upp allt som går omkring",
            },
        ],
    },
    QuizQuestion {
        id: 8,
        topic: "fokus",
        question: "Hur är ditt fokus och koncentration?",
        subtitle: "Mental klarhet är viktig för produktivitet och livskvalitet",
        options: &[
            QuizOption {
                value: "excellent_focus",
                label: "Utmärkt fokus och mental klarhet",
                description: "Jag kan koncentrera mig lätt hela dagen",
            },
            QuizOption {
                value: "good_focus",
                label: "Bra fokus men trötthet påverkar",
                description: "Generellt bra men svårare när jag är trött",
            },
            QuizOption {
                value: "poor_focus",
                label: "Svårt att koncentrera sig",
                description: "Jag distraheras lätt och har svårt att fokusera länge",
            },
            QuizOption {
                value: "brain_fog",
                label: "Ständig hjärndimma",
                description: "Jag har ofta svårt att tänka klart",
            },
        ],
    },
    QuizQuestion {
        id: 9,
        topic: "största utmaning",
        question: "Vilken är din största hälsoutmaning just nu?",
        subtitle: "Vi vill förstå vad som oroar dig mest med din hälsa",
        options: &[
            QuizOption {
                value: "weight_management",
                label: "Vikthantering",
                description: "Jag vill gå ner eller upp i vikt på ett hälsosamt sätt",
            },
            QuizOption {
                value: "energy_fatigue",
                label: "Energi och trötthet",
                description: "Jag känner mig ofta trött och vill ha mer energi",
            },
            QuizOption {
                value: "stress_recovery",
                label: "Stress och återhämtning",
                description: "Jag behöver bättre stresshantering och vila",
            },
            QuizOption {
                value: "general_health",
                label: "Allmän hälsa och prevention",
                description: "Jag vill optimera min hälsa och förebygga sjukdom",
            },
        ],
    },
    QuizQuestion {
        id: 10,
        topic: "huvudmål",
        question: "Vad är ditt huvudsakliga mål med functional food?",
        subtitle: "Vad hoppas du uppnå genom förbättrad näring?",
        options: &[
            QuizOption {
                value: "energy_vitality",
                label: "Mer energi och vitalitet",
                description: "Jag vill känna mig piggare och mer livlig",
            },
            QuizOption {
                value: "immunity_boost",
                label: "Bättre immunförsvar",
                description: "Jag vill stärka min motståndskraft mot sjukdomar",
            },
            QuizOption {
                value: "digestive_health",
                label: "Förbättrad matsmältning",
                description: "Jag vill ha en hälsosammare mage och tarm",
            },
            QuizOption {
                value: "mental_clarity",
                label: "Mental klarhet och fokus",
                description: "Jag vill tänka klarare och vara mer fokuserad",
            },
        ],
    },
];
