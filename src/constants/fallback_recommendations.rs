use once_cell::sync::Lazy;

use crate::models::domain::{HealthScores, Recommendations};

/// Served verbatim whenever the model path fails. Never merged with model output.
pub static FALLBACK_RECOMMENDATIONS: Lazy<Recommendations> = Lazy::new(|| Recommendations {
    scores: HealthScores {
        energi: 5,
        somn: 5,
        stress: 5,
        kost: 5,
        motion: 5,
    },
    summary: "<h3>Din Hälsosammanfattning</h3><p>Baserat på dina svar ser jag att du har potential att förbättra flera områden av din hälsa. Energi, sömn och stress påverkar varandra: när sömnen inte räcker till sjunker energin, och när stressen är hög blir det svårare att sova djupt.</p><p>Genom att ta små, konsekventa steg inom kost, sömn och rörelse kan du bryta den cirkeln och bygga en stabil grund för bättre hälsa.</p>".to_string(),
    kostrad: "<h3>Dina Personliga Kostråd</h3><p>För dig rekommenderar jag att du börjar med att stabilisera blodsockret genom att äta protein och fibrer vid varje måltid. Börja dagen med ägg, avokado och grönsaker eller grekisk yoghurt med bär och nötter.</p><p>Ät fet fisk som lax eller makrill två till tre gånger i veckan för omega-3, välj färgstarka grönsaker och fullkorn, och minska socker och processad mat. Drick minst två liter vatten om dagen och undvik koffein efter klockan 14.</p>".to_string(),
    livsstil: "<h3>Din Livsstilsplan</h3><p>För att optimera din livsstil behöver du rutiner som stödjer din dygnsrytm. Gå upp och lägg dig samma tid varje dag, helst före 22:30, och stäng av skärmar en timme innan du somnar.</p><p>Rör dig minst 30 minuter varje dag, till exempel en rask promenad, yoga eller styrketräning. Avsätt tio minuter dagligen för andningsövningar eller meditation och sök dagsljus på morgonen.</p>".to_string(),
    functional_foods: "<h3>Dina Functional Foods</h3><p>För dina behov rekommenderar jag probiotika med 10-50 miljarder CFU på morgonen för tarmhälsan, omega-3 med 1-2 g EPA/DHA till maten och magnesium 200-400 mg på kvällen för sömn och återhämtning.</p><p>Under vinterhalvåret är D-vitamin 1000-2000 IE per dag ett bra komplement. Curcumin med svartpeppar har antiinflammatorisk effekt. Ta tillskotten tillsammans med mat för bättre upptag.</p>".to_string(),
    prioriteringar: "<h3>Din Prioriteringsplan</h3><p>Vecka 1-2: fokusera på sömnen med fasta tider och en kvällsrutin utan skärmar. Vecka 3-4: lägg till probiotika på morgonen och magnesium på kvällen.</p><p>Vecka 5-6: inför daglig rörelse och börja med korta promenader. Vecka 7-8: byt ut processad mat mot antiinflammatoriska livsmedel. Ta en förändring i taget så blir vanorna hållbara.</p>".to_string(),
    din_kurs: "<h3>Din Rekommenderade Kurs</h3><p>För dig passar kursen Functional Basics på functionalfoods.se. Under sex veckor lär du dig grunderna i functional foods med 75 recept, måltidsplaner, råvaruguide och videolektioner varje vecka.</p><p>Kursen fokuserar på stabilt blodsocker, mer energi och ett starkare immunförsvar och ger dig verktygen att skapa hållbara matvanor från grunden.</p>".to_string(),
});
