//! Prompt builders for the two script features: free-text script from an
//! idea, and the structured formula-driven script.

use kreasi_models::{FormulaScriptRequest, Schema, ScriptFromIdeaRequest};

use super::PromptSpec;

const FORMULA_SYSTEM_INSTRUCTION: &str = r#"You are a Script Generator Expert and a HOOK OPTIMIZER (storytelling and copywriting expert).

**YOUR PRIMARY JOB IS HOOK OPTIMIZATION:**
Saat menerima input untuk script, kamu harus menganalisa dan mengoptimasi bagian "HOOK" secara agresif sehingga:
1. Memanfaatkan frameworks "3 Detik Penentu" (Fear, Urgency, Curiosity, Value, Relatability, Question, Contrarian, dll).
2. Menyesuaikan jenis hook dengan formula storytelling yang dipilih user (misal: PAS prefer Problem Hook, BAB prefer Transformation Hook).
3. Menggunakan kalimat sangat singkat (3-7 kata untuk visual, 1-2 baris padat untuk voice), tanpa filler, to the point, dan memicu emosi/penasaran.
4. Menyediakan 2-3 variasi hook berbeda (A/B testing) dalam field 'hook_variations'.

**CORE SCRIPT GENERATION RULES:**
- Generate complete script based on user inputs and formula frameworks (PAS, AIDA, STAR, etc.).
- **Integrate product/solution naturally** according to audience awareness and storytelling framework.
- Adjust tone/voice strictly to user preference.
- For 'Educational' goals, use product as a case study or tool.
- For 'Selling' goals, pitch directly but elegantly.
- Ensure CTA connects personally with the product/solution.

**BRAINSTORMING STEP:**
Analyze the topic, audience, goal, and formula. Determine the most effective psychological triggers for the HOOKS. Then construct the full script around these powerful openers.

Return valid JSON strictly matching the schema."#;

/// Expected shape of a formula-driven script response.
pub fn formula_response_schema() -> Schema {
    let hook_variation = Schema::object(
        vec![
            (
                "type",
                Schema::string().described("Type of hook (e.g., Fear-based, Curiosity)"),
            ),
            ("hook", Schema::string().described("The hook text")),
            (
                "usage",
                Schema::string().described("Visual or Voice-over recommendation"),
            ),
        ],
        &["type", "hook", "usage"],
    );
    let section = Schema::object(
        vec![("stage", Schema::string()), ("content", Schema::string())],
        &["stage", "content"],
    );
    Schema::object(
        vec![
            ("title", Schema::string()),
            (
                "hook",
                Schema::string()
                    .described("The single best, strongest hook optimized for the script."),
            ),
            ("hook_variations", Schema::array(hook_variation)),
            ("body", Schema::array(section)),
            ("cta", Schema::string()),
            ("delivery_notes", Schema::string()),
        ],
        &["title", "hook", "body", "cta", "delivery_notes"],
    )
}

pub fn build_formula(request: &FormulaScriptRequest) -> PromptSpec {
    let stages = request.formula.stages().join(", ");
    let formula_instruction = format!(
        "Ikuti formula {}. Struktur skrip harus terdiri dari tahapan berikut secara urut: {}.",
        request.formula, stages
    );

    let offer = if request.offer.trim().is_empty() {
        "N/A"
    } else {
        request.offer.as_str()
    };

    let mut user_prompt = format!(
        r#"DOKUMEN INPUT GENERATOR:
- Formula: {formula}
- Tipe User: {user_type}
- Tujuan Konten: {goal}
- Target Durasi: {duration} detik
- Target Audiens: {audience}
- Awareness Audiens: {awareness}
- Topik & Poin Utama: {topic}
- Produk / Solusi: {offer}
- Gaya & Persona: {style}
- Call to Action (CTA): {cta}

STRUKTUR FORMULA: {formula_instruction}
"#,
        formula = request.formula,
        user_type = request.user_type_text(),
        goal = request.goal_text(),
        duration = request.duration,
        audience = request.audience,
        awareness = request.awareness,
        topic = request.topic_and_points,
        offer = offer,
        style = request.style_and_persona,
        cta = request.cta,
    );

    if let Some(revision) = request.revision.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        user_prompt.push_str(&format!(
            "\n\nPERINTAH REVISI KHUSUS: {}. Mohon sesuaikan skrip sebelumnya dengan instruksi revisi ini tanpa merusak struktur formula.",
            revision
        ));
    }

    PromptSpec::new(FORMULA_SYSTEM_INSTRUCTION, user_prompt)
        .with_schema(formula_response_schema())
        .with_thinking_budget(4000)
}

/// Free-text script from one generated idea; no schema, four fixed parts.
pub fn build_from_idea(request: &ScriptFromIdeaRequest) -> PromptSpec {
    let user_prompt = format!(
        r#"Anda adalah seorang penulis skrip ahli untuk konten media sosial.
Tugas: Ubah ide konten menjadi skrip terstruktur (4 bagian).

**KONTEKS:**
- Audiens: {audience} ({level})
- Tone: {tone}

**IDE:**
- Summary: {summary}
- Angle: {angle}
- Outline: {outline}

**FORMAT OUTPUT (WAJIB):**
**Hook:** [Teks]
**Foreshadowing:** [Teks]
**Story/Conflict:** [Teks]
**Payoff/Resolution:** [Teks + CTA: "{cta}"]
"#,
        audience = request.context.audience_segment,
        level = request.context.audience_level,
        tone = request.context.brand_voice_tags.join(", "),
        summary = request.idea.summary,
        angle = request.idea.unique_angle,
        outline = request.idea.outline.join("; "),
        cta = request.idea.cta,
    );

    PromptSpec::new("", user_prompt)
}
