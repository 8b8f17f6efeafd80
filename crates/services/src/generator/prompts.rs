use malaab_core::model::{CardLevel, ExerciseKind};
use serde_json::{Value, json};

/// Persona and ground rules shared by every request.
pub const PREAMBLE: &str = "أنتِ سماح، معلمة لغة عربية تُعِدّ تمارين قصيرة لطلاب الصف الرابع الابتدائي. \
اجعلي كل تمرين مرتبطاً بعالم كرة القدم، واستخدمي لغة سهلة وواضحة، وأعيدي الناتج بصيغة JSON فقط.";

/// Kind-specific task text appended to the preamble.
#[must_use]
pub fn task(kind: ExerciseKind, level: Option<CardLevel>) -> String {
    match kind {
        ExerciseKind::FillBlank => "صممي تمرين «املأ الفراغ» في قواعد اللغة العربية. \
اكتبي جملة واحدة فيها فراغ واحد فقط مكتوب هكذا ___ . \
أعطي الكلمة الصحيحة وثلاث كلمات خاطئة قريبة منها، بحيث يكون مجموع الخيارات أربعة، \
وأضيفي شرحاً قصيراً لسبب صحة الإجابة."
            .to_owned(),
        ExerciseKind::MultipleChoice => "صممي سؤال اختيار من متعدد في قواعد اللغة العربية. \
يجب أن يكون للسؤال أربعة خيارات، واحد منها فقط صحيح ومكتوب حرفياً كما في الخيارات، \
مع شرح قصير للإجابة."
            .to_owned(),
        ExerciseKind::ReadingComprehension => "اكتبي فقرة قصيرة ممتعة عن كرة القدم من جملتين إلى أربع جمل. \
ثم ضعي سؤال فهم واحداً عن الفقرة مع أربعة خيارات، واحد منها فقط صحيح، وشرحاً قصيراً للإجابة."
            .to_owned(),
        ExerciseKind::EducationalCard => {
            let level = level.unwrap_or(CardLevel::Beginner).label();
            format!(
                "أنشئي محتوى «بطاقة تعليمية» لمستوى {level}. \
اختاري مفهوماً بسيطاً في قواعد اللغة العربية (مثل الاسم أو الفعل أو الصفة أو حرف الجر)، \
واشرحيه شرحاً مبسطاً جداً، وأعطي مثالاً من عالم كرة القدم."
            )
        }
    }
}

/// Full instruction text sent to the service.
#[must_use]
pub fn instruction(kind: ExerciseKind, level: Option<CardLevel>) -> String {
    format!("{PREAMBLE} {}", task(kind, level))
}

fn text(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn four_options(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "minItems": 4,
        "maxItems": 4,
        "description": description,
    })
}

/// Declared output schema for `kind`. Field names match the payload structs.
#[must_use]
pub fn schema(kind: ExerciseKind) -> Value {
    match kind {
        ExerciseKind::FillBlank => json!({
            "type": "OBJECT",
            "properties": {
                "sentence": text("الجملة وفيها فراغ واحد ___"),
                "options": four_options("أربعة خيارات: الإجابة الصحيحة وثلاثة خيارات خاطئة"),
                "answer": text("الكلمة الصحيحة لملء الفراغ، مطابقة لأحد الخيارات"),
                "explanation": text("شرح قصير للإجابة"),
            },
            "required": ["sentence", "options", "answer", "explanation"],
        }),
        ExerciseKind::MultipleChoice => json!({
            "type": "OBJECT",
            "properties": {
                "question": text("نص السؤال"),
                "options": four_options("أربعة خيارات نصية"),
                "correct_answer": text("الإجابة الصحيحة، مطابقة لأحد الخيارات"),
                "explanation": text("شرح قصير للإجابة"),
            },
            "required": ["question", "options", "correct_answer", "explanation"],
        }),
        ExerciseKind::ReadingComprehension => json!({
            "type": "OBJECT",
            "properties": {
                "paragraph": text("الفقرة عن كرة القدم"),
                "question": text("سؤال عن الفقرة"),
                "options": four_options("أربعة خيارات نصية"),
                "correct_answer": text("الإجابة الصحيحة، مطابقة لأحد الخيارات"),
                "explanation": text("شرح قصير للإجابة"),
            },
            "required": ["paragraph", "question", "options", "correct_answer", "explanation"],
        }),
        ExerciseKind::EducationalCard => json!({
            "type": "OBJECT",
            "properties": {
                "concept": text("اسم القاعدة النحوية"),
                "explanation": text("شرح مبسط جداً للمفهوم"),
                "example": text("جملة مثال عن كرة القدم"),
            },
            "required": ["concept", "explanation", "example"],
        }),
    }
}
