// Stylized sneaker silhouette, emitted as inline SVG markup.
//
// Gradient and filter ids carry the frame index: several silhouettes share
// one document, and `url(#id)` resolves to the first match.

#[inline]
pub fn upper_hue(hue: u16) -> u16 {
    (hue % 360 + 20) % 360
}

pub fn sneaker_svg(index: usize, hue: u16, accent: &str) -> String {
    let sole_hue = hue % 360;
    let upper_hue = upper_hue(hue);
    format!(
        r##"<svg viewBox="0 0 1200 700" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
  <defs>
    <linearGradient id="soleGrad-{i}" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="hsl({sole_hue} 70% 92%)" />
      <stop offset="100%" stop-color="hsl({sole_hue} 60% 82%)" />
    </linearGradient>
    <linearGradient id="upperGrad-{i}" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="hsl({upper_hue} 90% 60%)" />
      <stop offset="100%" stop-color="hsl({upper_hue} 80% 46%)" />
    </linearGradient>
    <linearGradient id="shadowGrad-{i}" x1="0" y1="0" x2="0" y2="1">
      <stop offset="0%" stop-color="rgba(0,0,0,0.2)" />
      <stop offset="100%" stop-color="rgba(0,0,0,0)" />
    </linearGradient>
    <filter id="soft-{i}" x="-20%" y="-20%" width="140%" height="140%">
      <feGaussianBlur in="SourceAlpha" stdDeviation="6" result="blur" />
      <feColorMatrix in="blur" type="matrix" values="0 0 0 0 0  0 0 0 0 0  0 0 0 0 0  0 0 0 .35 0" />
      <feBlend in="SourceGraphic" mode="normal" />
    </filter>
  </defs>
  <g transform="translate(40,420)">
    <path d="M40,120 C220,80 380,30 600,40 C780,48 910,90 1040,120 C1060,124 1080,140 1080,160 C1080,200 1020,220 980,230 C720,290 300,270 120,220 C60,204 20,180 20,160 C20,140 30,128 40,120 Z" fill="url(#soleGrad-{i})" />
    <path d="M60,150 C260,120 360,120 580,135 C760,148 930,168 1010,180" stroke="rgba(0,0,0,.2)" stroke-width="18" stroke-linecap="round" filter="url(#soft-{i})" />
  </g>
  <g transform="translate(90,90)">
    <path d="M120,300 C180,180 260,120 420,100 C640,72 800,120 980,220 C1010,236 1040,270 1040,310 C1040,360 980,420 880,440 C680,480 440,460 300,430 C200,410 140,380 120,340 C110,320 112,310 120,300 Z" fill="url(#upperGrad-{i})" />
    <path d="M340,160 C420,120 520,110 640,120 C700,124 760,140 820,168 C760,150 700,144 640,142 C520,138 420,146 340,160 Z" fill="rgba(255,255,255,.25)" />
    <g stroke="#f7f7f7" stroke-width="16" stroke-linecap="round">
      <path d="M420,230 L720,220" />
      <path d="M410,270 L730,260" />
      <path d="M400,310 L740,300" />
      <path d="M395,350 L745,340" />
    </g>
    <path d="M520,360 C640,320 740,290 840,300 C800,320 720,352 640,380 C580,402 520,410 480,408 C494,392 506,376 520,360 Z" fill="{accent}" opacity=".85" />
    <g opacity=".25" fill="#000">
      <circle cx="820" cy="330" r="6" />
      <circle cx="840" cy="324" r="6" />
      <circle cx="860" cy="318" r="6" />
      <circle cx="880" cy="312" r="6" />
      <circle cx="900" cy="306" r="6" />
    </g>
  </g>
  <ellipse cx="600" cy="610" rx="360" ry="40" fill="rgba(0,0,0,.55)" filter="url(#soft-{i})" />
</svg>"##,
        i = index,
        sole_hue = sole_hue,
        upper_hue = upper_hue,
        accent = accent,
    )
}
