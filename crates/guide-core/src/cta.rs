/// Call-to-action blocks, one per category.
use crate::error::CoreError;
use crate::model::{DynamicCta, ProblemCategory};
use crate::template::{render, tidy_spacing, Vars};

pub struct CtaDef {
    pub urgency: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub pain_point: &'static str,
}

pub fn cta_for(category: ProblemCategory) -> &'static CtaDef {
    match category {
        ProblemCategory::Battery => &BATTERY,
        ProblemCategory::Charging => &CHARGING,
        ProblemCategory::Brush => &BRUSH,
        ProblemCategory::Filter => &FILTER,
        ProblemCategory::Motor => &MOTOR,
        ProblemCategory::Suction => &SUCTION,
        ProblemCategory::ErrorCodes => &ERROR_CODES,
        ProblemCategory::Attachment => &ATTACHMENT,
        ProblemCategory::Belt => &BELT,
        ProblemCategory::Leak => &LEAK,
        ProblemCategory::Pulsing => &PULSING,
        ProblemCategory::Noise => &NOISE,
        ProblemCategory::Heating => &HEATING,
        ProblemCategory::Connectivity => &CONNECTIVITY,
        ProblemCategory::Mapping => &MAPPING,
        ProblemCategory::Power | ProblemCategory::General => &GENERAL,
    }
}

/// Render the CTA for `category`. `{code}` renders empty when no code is known.
pub fn build_cta(
    category: ProblemCategory,
    display_model: &str,
    error_code: Option<&str>,
) -> Result<DynamicCta, CoreError> {
    let def = cta_for(category);
    let vars = Vars::new()
        .with("model", display_model)
        .with("code", error_code.unwrap_or(""));

    Ok(DynamicCta {
        urgency: def.urgency.to_string(),
        text: tidy_spacing(&render(def.text, &vars)?),
        subtext: tidy_spacing(&render(def.subtext, &vars)?),
        color: def.color.to_string(),
        icon: def.icon.to_string(),
        pain_point: def.pain_point.to_string(),
    })
}

static BATTERY: CtaDef = CtaDef {
    urgency: "high",
    text: "⚡ Stop Waiting - Fix Your {model} Battery Today",
    subtext: "Don't let a dead battery ruin your cleaning routine. Professional replacement ready to ship.",
    color: "red",
    icon: "🔋",
    pain_point: "Your vacuum won't hold a charge",
};

static CHARGING: CtaDef = CtaDef {
    urgency: "high",
    text: "🔌 Fix Charging Issues - Get Your {model} Working Again",
    subtext: "Stop dealing with the frustration of a vacuum that won't charge. We have the solution.",
    color: "orange",
    icon: "⚡",
    pain_point: "Your vacuum won't charge properly",
};

static BRUSH: CtaDef = CtaDef {
    urgency: "medium",
    text: "🔄 Restore Full Cleaning Power - Replace Your Brush",
    subtext: "A worn brush won't clean anything. Get genuine replacement for maximum performance.",
    color: "blue",
    icon: "🧹",
    pain_point: "Poor cleaning performance",
};

static FILTER: CtaDef = CtaDef {
    urgency: "medium",
    text: "🌬️ Breathe Easy - Replace Clogged Filters Today",
    subtext: "Dirty filters reduce suction and damage your motor. Protect your investment.",
    color: "green",
    icon: "✨",
    pain_point: "Reduced suction and air quality",
};

static MOTOR: CtaDef = CtaDef {
    urgency: "high",
    text: "💪 Professional Motor Replacement - Don't Risk Further Damage",
    subtext: "A failing motor can destroy your vacuum. Expert replacement service available.",
    color: "red",
    icon: "⚙️",
    pain_point: "Motor failure or strange noises",
};

static SUCTION: CtaDef = CtaDef {
    urgency: "medium",
    text: "📈 Restore Maximum Suction - Professional Parts Ready",
    subtext: "Weak suction? We have the exact parts to restore your {model}'s power.",
    color: "blue",
    icon: "💨",
    pain_point: "Weak suction power",
};

static ERROR_CODES: CtaDef = CtaDef {
    urgency: "high",
    text: "🔧 Decoding Error {code}? We Have the Solution",
    subtext: "Don't let mysterious error codes stop you. Expert diagnostics and parts available.",
    color: "orange",
    icon: "❓",
    pain_point: "Confusing error messages",
};

static ATTACHMENT: CtaDef = CtaDef {
    urgency: "low",
    text: "🔗 Fix Attachment Issues - Get Your Tools Working",
    subtext: "Loose or broken attachments? We have genuine replacements ready to ship.",
    color: "blue",
    icon: "🛠️",
    pain_point: "Attachments not working properly",
};

static BELT: CtaDef = CtaDef {
    urgency: "high",
    text: "⚙️ Replace Worn Belt - Restore Full Performance",
    subtext: "A broken belt means no cleaning. Fast replacement service available.",
    color: "orange",
    icon: "🔧",
    pain_point: "Brush not spinning",
};

static LEAK: CtaDef = CtaDef {
    urgency: "high",
    text: "🛑 Stop the Leak - Fix Your {model} Now",
    subtext: "Water damage can destroy your vacuum. Quick fixes available.",
    color: "red",
    icon: "💧",
    pain_point: "Water or liquid leaking",
};

static PULSING: CtaDef = CtaDef {
    urgency: "high",
    text: "⚡ Fix Pulsing Issue - Stop the Annoying On-Off Cycle",
    subtext: "Pulsing means a sensor or blockage issue. We have the parts to fix it permanently.",
    color: "orange",
    icon: "📳",
    pain_point: "Vacuum keeps pulsing on and off",
};

static NOISE: CtaDef = CtaDef {
    urgency: "medium",
    text: "🔇 Silence Strange Noises - Protect Your Vacuum",
    subtext: "Unusual noises mean wear or damage. Fix it before it becomes a costly repair.",
    color: "yellow",
    icon: "🔊",
    pain_point: "Loud or unusual noises",
};

static HEATING: CtaDef = CtaDef {
    urgency: "high",
    text: "🌡️ Overheating? Fix It Before Permanent Damage",
    subtext: "Overheating can kill your motor. Quick diagnosis and repair available.",
    color: "red",
    icon: "🔥",
    pain_point: "Vacuum getting too hot",
};

static CONNECTIVITY: CtaDef = CtaDef {
    urgency: "low",
    text: "📶 Fix Connection Issues - Get Smart Features Working",
    subtext: "WiFi or app problems? We can help restore your smart vacuum's features.",
    color: "blue",
    icon: "📱",
    pain_point: "Can't connect to app or WiFi",
};

static MAPPING: CtaDef = CtaDef {
    urgency: "low",
    text: "🗺️ Fix Navigation Issues - Restore Smart Cleaning",
    subtext: "Mapping problems? We have sensors and parts to get your robot vacuum back on track.",
    color: "blue",
    icon: "🤖",
    pain_point: "Robot vacuum navigation problems",
};

static GENERAL: CtaDef = CtaDef {
    urgency: "low",
    text: "🔧 Get Your {model} Running Like New",
    subtext: "Whatever the issue, we have the parts and expertise to help.",
    color: "blue",
    icon: "✅",
    pain_point: "General performance issues",
};
